use crate::types::{Request, RequestState};

/// Derives the state of `request` as seen at ledger `ledger`.
///
/// The two terminal flags win over everything else. Otherwise the state
/// follows from where `ledger` sits relative to the voting window and, once
/// the window has closed, from the tallies. Equal weight never passes.
pub(crate) fn state_at(request: &Request, ledger: u32) -> RequestState {
    if request.executed {
        return RequestState::Executed;
    }
    if request.cancelled {
        return RequestState::Cancelled;
    }
    if ledger < request.snapshot_ledger {
        return RequestState::Pending;
    }
    if ledger <= request.deadline_ledger {
        return RequestState::Active;
    }
    if request.positive_weight > request.negative_weight {
        RequestState::Succeeded
    } else {
        RequestState::Defeated
    }
}

pub(crate) fn is_cancellable(state: RequestState) -> bool {
    matches!(state, RequestState::Pending | RequestState::Active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};

    fn request(env: &Env, positive: u32, negative: u32) -> Request {
        Request {
            id: BytesN::from_array(env, &[7u8; 32]),
            creator: Address::generate(env),
            target: Address::generate(env),
            amount: 100,
            description: String::from_str(env, "laptop"),
            created_ledger: 10,
            snapshot_ledger: 11,
            deadline_ledger: 16,
            positive_weight: positive,
            negative_weight: negative,
            cancelled: false,
            executed: false,
        }
    }

    #[test]
    fn test_window_boundaries() {
        let env = Env::default();
        let req = request(&env, 3, 1);

        assert_eq!(state_at(&req, 10), RequestState::Pending);
        assert_eq!(state_at(&req, 11), RequestState::Active);
        assert_eq!(state_at(&req, 16), RequestState::Active);
        assert_eq!(state_at(&req, 17), RequestState::Succeeded);
        assert_eq!(state_at(&req, u32::MAX), RequestState::Succeeded);
    }

    #[test]
    fn test_ties_are_defeated() {
        let env = Env::default();

        assert_eq!(state_at(&request(&env, 0, 0), 17), RequestState::Defeated);
        assert_eq!(state_at(&request(&env, 5, 5), 17), RequestState::Defeated);
        assert_eq!(state_at(&request(&env, 4, 5), 17), RequestState::Defeated);
    }

    #[test]
    fn test_terminal_flags_take_precedence() {
        let env = Env::default();

        let mut req = request(&env, 3, 1);
        req.cancelled = true;
        assert_eq!(state_at(&req, 10), RequestState::Cancelled);
        assert_eq!(state_at(&req, 13), RequestState::Cancelled);
        assert_eq!(state_at(&req, 100), RequestState::Cancelled);

        let mut req = request(&env, 3, 1);
        req.executed = true;
        assert_eq!(state_at(&req, 100), RequestState::Executed);
    }

    #[test]
    fn test_only_open_requests_are_cancellable() {
        assert!(is_cancellable(RequestState::Pending));
        assert!(is_cancellable(RequestState::Active));
        assert!(!is_cancellable(RequestState::Cancelled));
        assert!(!is_cancellable(RequestState::Defeated));
        assert!(!is_cancellable(RequestState::Succeeded));
        assert!(!is_cancellable(RequestState::Executed));
    }
}
