use crate::{ErrCode, ErrorConst};
use near_sdk::env;
use std::fmt::Display;

pub const ERR_CODE_BAD_REQUEST: ErrCode = ErrCode("BAD_REQUEST");

/// meant to be used for triggering generic data validation failures
pub const ERR_INVALID: ErrCode = ErrCode("INVALID");

/// the caller lacks the role required by the operation
pub const ERR_CODE_PERMISSION_DENIED: ErrCode = ErrCode("PERMISSION_DENIED");

/// persisted state failed an internal consistency check
pub const ERR_CODE_STATE_CORRUPTED: ErrCode = ErrCode("STATE_CORRUPTED");

pub const ERR_INVALID_AMOUNT: ErrorConst =
    ErrorConst(ErrCode("INVALID_AMOUNT"), "amount must not be zero");

pub const ERR_INSUFFICIENT_BALANCE: ErrorConst = ErrorConst(
    ErrCode("INSUFFICIENT_BALANCE"),
    "account has insufficient balance to fulfill request",
);

pub const ERR_YOCTONEAR_DEPOSIT_REQUIRED: ErrorConst = ErrorConst(
    ErrCode("YOCTONEAR_DEPOSIT_REQUIRED"),
    "exactly 1 yoctoNEAR must be attached",
);

pub fn assert_request<F, Msg, MsgF>(check: F, msg: MsgF)
where
    F: FnOnce() -> bool,
    Msg: Display,
    MsgF: FnOnce() -> Msg,
{
    ERR_CODE_BAD_REQUEST.assert(check, msg);
}

pub fn assert_non_zero_amount(amount: u128) {
    ERR_INVALID_AMOUNT.assert(|| amount > 0);
}

/// used to protect owner and operator functions against FCAK calls
pub fn assert_yocto_near_attached() {
    ERR_YOCTONEAR_DEPOSIT_REQUIRED.assert(|| env::attached_deposit() == 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use oysterpack_smart_near_test::*;

    #[test]
    fn assert_yocto_near_attached_check_passes() {
        let mut ctx = new_context("bob");
        ctx.attached_deposit = 1;
        testing_env!(ctx);

        assert_yocto_near_attached();
    }

    #[test]
    #[should_panic(
        expected = "[ERR] [YOCTONEAR_DEPOSIT_REQUIRED] exactly 1 yoctoNEAR must be attached"
    )]
    fn assert_yocto_near_attached_with_zero_deposit() {
        testing_env!(new_context("bob"));

        assert_yocto_near_attached();
    }

    #[test]
    #[should_panic(
        expected = "[ERR] [YOCTONEAR_DEPOSIT_REQUIRED] exactly 1 yoctoNEAR must be attached"
    )]
    fn assert_yocto_near_attached_with_2_deposit() {
        let mut ctx = new_context("bob");
        ctx.attached_deposit = 2;
        testing_env!(ctx);

        assert_yocto_near_attached();
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID_AMOUNT] amount must not be zero")]
    fn assert_non_zero_amount_with_zero() {
        testing_env!(new_context("bob"));

        assert_non_zero_amount(1);
        assert_non_zero_amount(0);
    }

    #[test]
    #[should_panic(expected = "[ERR] [BAD_REQUEST] sender and receiver must differ")]
    fn assert_request_failure() {
        testing_env!(new_context("bob"));

        assert_request(|| false, || "sender and receiver must differ");
    }
}
