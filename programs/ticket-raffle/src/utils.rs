use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::rent_shortfall;

/// True once `account` has been created and assigned to this program.
pub fn is_program_account(account: &AccountInfo) -> bool {
    account.owner == &crate::ID && !account.data_is_empty()
}

/// Creates a program-owned PDA with `space` bytes, rent paid by `payer`.
///
/// A PDA that already holds lamports cannot go through `create_account`, so in
/// that case it is topped up, allocated and assigned instead.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(space);
    let current = target.lamports();
    let signer = &[signer_seeds];

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer,
            ),
            rent_floor,
            space as u64,
            &crate::ID,
        );
    }

    let shortfall = rent_shortfall(rent_floor, current);
    if shortfall > 0 {
        transfer_lamports(payer, target, system_program, shortfall)?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        &crate::ID,
    )
}

pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Moves lamports out of the vault PDA, which signs with `vault_seeds`.
pub fn transfer_from_vault<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Transfer {
                from: vault.clone(),
                to: to.clone(),
            },
            &[vault_seeds],
        ),
        amount,
    )
}
