use serde::{Deserialize, Serialize};

/// The four stations of a transfer. Consumers read this only as an ordinal
/// threshold: UI for step N implies every earlier step's conditions held.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum TransferStep {
    #[default]
    GeneratingDepositAddress,
    AwaitingDeposit,
    ConfirmingDeposit,
    TransferComplete,
}

impl TransferStep {
    pub const ALL: [TransferStep; 4] = [
        TransferStep::GeneratingDepositAddress,
        TransferStep::AwaitingDeposit,
        TransferStep::ConfirmingDeposit,
        TransferStep::TransferComplete,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            TransferStep::GeneratingDepositAddress => 1,
            TransferStep::AwaitingDeposit => 2,
            TransferStep::ConfirmingDeposit => 3,
            TransferStep::TransferComplete => 4,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<TransferStep> {
        match ordinal {
            1 => Some(TransferStep::GeneratingDepositAddress),
            2 => Some(TransferStep::AwaitingDeposit),
            3 => Some(TransferStep::ConfirmingDeposit),
            4 => Some(TransferStep::TransferComplete),
            _ => None,
        }
    }

    /// Ordinal threshold test: has the flow reached `station` yet?
    pub fn reached(self, station: TransferStep) -> bool {
        self >= station
    }

    pub fn advanced(self) -> Option<TransferStep> {
        TransferStep::from_ordinal(self.ordinal() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::TransferStep;

    #[test]
    fn ordinals_round_trip() {
        for step in TransferStep::ALL {
            assert_eq!(TransferStep::from_ordinal(step.ordinal()), Some(step));
        }
        assert_eq!(TransferStep::from_ordinal(0), None);
        assert_eq!(TransferStep::from_ordinal(5), None);
    }

    #[test]
    fn reached_is_an_ordinal_threshold() {
        let step = TransferStep::ConfirmingDeposit;
        assert!(step.reached(TransferStep::GeneratingDepositAddress));
        assert!(step.reached(TransferStep::AwaitingDeposit));
        assert!(step.reached(TransferStep::ConfirmingDeposit));
        assert!(!step.reached(TransferStep::TransferComplete));
    }

    #[test]
    fn advanced_stops_at_complete() {
        assert_eq!(
            TransferStep::ConfirmingDeposit.advanced(),
            Some(TransferStep::TransferComplete)
        );
        assert_eq!(TransferStep::TransferComplete.advanced(), None);
    }
}
