use near_sdk::env;
use std::fmt::{self, Display, Formatter};

/// Error codes are rendered as `[ERR] [CODE]` and prefix every contract panic message.
/// - callers and tests match on the code, the message is for humans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrCode(pub &'static str);

impl Display for ErrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ERR] [{}]", self.0)
    }
}

impl ErrCode {
    /// constructs an [`Error`] using this [`ErrCode`] and the specified message
    pub fn error<Msg: Display>(&self, msg: Msg) -> Error<Msg> {
        Error(*self, msg)
    }

    /// panics with the message produced by `msg` if `check` fails
    /// - the message is only built when the check fails
    pub fn assert<F, Msg, MsgF>(&self, check: F, msg: MsgF)
    where
        F: FnOnce() -> bool,
        Msg: Display,
        MsgF: FnOnce() -> Msg,
    {
        if !check() {
            self.error(msg()).panic();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error<Msg>(pub ErrCode, pub Msg)
where
    Msg: Display;

impl<Msg> Display for Error<Msg>
where
    Msg: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl<Msg> Error<Msg>
where
    Msg: Display,
{
    /// aborts the current transaction - all state changes made by the call are rolled back
    pub fn panic(&self) -> ! {
        env::panic(self.to_string().as_bytes())
    }

    pub fn log(&self) {
        env::log(self.to_string().as_bytes())
    }
}

/// Error that can be defined as a constant, i.e., the error message is constant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorConst(pub ErrCode, pub &'static str);

impl Display for ErrorConst {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

impl ErrorConst {
    pub fn code(&self) -> ErrCode {
        self.0
    }

    pub fn panic(&self) -> ! {
        env::panic(self.to_string().as_bytes())
    }

    pub fn assert<F>(&self, check: F)
    where
        F: FnOnce() -> bool,
    {
        if !check() {
            self.panic();
        }
    }

    /// uses the supplied message instead of the preset message
    pub fn assert_with_message<F, MsgF, Msg>(&self, check: F, msg: MsgF)
    where
        F: FnOnce() -> bool,
        MsgF: FnOnce() -> Msg,
        Msg: Display,
    {
        self.0.assert(check, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oysterpack_smart_near_test::*;
    use regex::Regex;

    const ERR_CODE: ErrCode = ErrCode("INVALID_AMOUNT");

    #[test]
    fn err_display_format() {
        let err_fmt_regex = Regex::new(r"^\[ERR] \[\w+] .+$").unwrap();

        assert!(err_fmt_regex.is_match(&ERR_CODE.error("amount must not be zero").to_string()));
        assert!(err_fmt_regex.is_match(&ErrorConst(ERR_CODE, "BOOM").to_string()));
        assert_eq!(
            ErrorConst(ERR_CODE, "BOOM").to_string(),
            "[ERR] [INVALID_AMOUNT] BOOM"
        );
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID_AMOUNT] BOOM")]
    fn error_panic() {
        testing_env!(new_context("bob"));

        ERR_CODE.error("BOOM".to_string()).panic();
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID_AMOUNT] BOOM")]
    fn error_const_assert() {
        testing_env!(new_context("bob"));

        const ERR: ErrorConst = ErrorConst(ERR_CODE, "BOOM");
        ERR.assert(|| true);
        ERR.assert(|| false);
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID_AMOUNT] custom message 10")]
    fn error_const_assert_with_message() {
        testing_env!(new_context("bob"));

        const ERR: ErrorConst = ErrorConst(ERR_CODE, "BOOM");
        ERR.assert_with_message(|| false, || format!("custom message {}", 10));
    }

    #[test]
    fn error_code_assert_builds_message_lazily() {
        testing_env!(new_context("bob"));

        ERR_CODE.assert(|| true, || -> String { panic!("message should not be built") });
    }
}
