use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // Raffle lifecycle
    #[msg("The raffle has already ended")]
    RaffleEnded,
    #[msg("The raffle has not ended yet")]
    RaffleNotEnded,
    #[msg("Winner has already been drawn")]
    WinnerAlreadyDrawn,
    #[msg("Winner has not been drawn yet")]
    WinnerNotDrawn,
    #[msg("Prize has already been claimed")]
    PrizeAlreadyClaimed,
    #[msg("No tickets were sold")]
    NoTicketsSold,
    #[msg("Buyer cannot cover the ticket price and rent")]
    InsufficientFunds,
    #[msg("Raffle account decodes cleanly and needs no migration")]
    MigrationNotRequired,

    // Authorization
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,
    #[msg("You do not own the winning ticket")]
    NotTicketOwner,

    // Account conflicts
    #[msg("A raffle already exists for this creator")]
    AlreadyExists,
    #[msg("Ticket account is already in use")]
    TicketAlreadyExists,

    // Input validation
    #[msg("Ticket price must be greater than zero")]
    InvalidPrice,
    #[msg("End time must be in the future")]
    InvalidDeadline,

    // Account decoding
    #[msg("Account data is too small for a raffle record")]
    AccountTooSmall,
    #[msg("Account discriminator does not match a raffle record")]
    DiscriminatorMismatch,
    #[msg("Winner slot holds an invalid tag")]
    InvalidWinnerEncoding,
    #[msg("Boolean field holds a byte other than 0 or 1")]
    InvalidBoolEncoding,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

/// Coarse classification of [`RaffleError`] for callers deciding how to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The raffle is in the wrong phase for the requested transition.
    PreconditionViolation,
    /// The signer is not the party the record names.
    AuthorizationFailure,
    /// The target address is already occupied.
    ResourceConflict,
    /// Instruction arguments are out of range.
    InputValidation,
    /// Stored bytes do not decode as the current layout; may need migration.
    DecodeFailure,
    Arithmetic,
}

impl ErrorKind {
    /// Conditions that may clear once the caller re-reads state and resubmits.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::PreconditionViolation | ErrorKind::ResourceConflict
        )
    }
}

impl RaffleError {
    pub fn kind(&self) -> ErrorKind {
        use RaffleError::*;
        match self {
            RaffleEnded | RaffleNotEnded | WinnerAlreadyDrawn | WinnerNotDrawn
            | PrizeAlreadyClaimed | NoTicketsSold | InsufficientFunds | MigrationNotRequired => {
                ErrorKind::PreconditionViolation
            }
            Unauthorized | NotTicketOwner => ErrorKind::AuthorizationFailure,
            AlreadyExists | TicketAlreadyExists => ErrorKind::ResourceConflict,
            InvalidPrice | InvalidDeadline => ErrorKind::InputValidation,
            AccountTooSmall | DiscriminatorMismatch | InvalidWinnerEncoding
            | InvalidBoolEncoding => ErrorKind::DecodeFailure,
            ArithmeticOverflow => ErrorKind::Arithmetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(RaffleError::RaffleEnded.kind(), ErrorKind::PreconditionViolation);
        assert_eq!(RaffleError::NotTicketOwner.kind(), ErrorKind::AuthorizationFailure);
        assert_eq!(RaffleError::TicketAlreadyExists.kind(), ErrorKind::ResourceConflict);
        assert_eq!(RaffleError::InvalidDeadline.kind(), ErrorKind::InputValidation);
        assert_eq!(RaffleError::InvalidBoolEncoding.kind(), ErrorKind::DecodeFailure);
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(RaffleError::AlreadyExists.kind().is_retryable());
        assert!(RaffleError::WinnerNotDrawn.kind().is_retryable());
        assert!(!RaffleError::Unauthorized.kind().is_retryable());
        assert!(!RaffleError::InvalidPrice.kind().is_retryable());
        assert!(!RaffleError::DiscriminatorMismatch.kind().is_retryable());
    }
}
