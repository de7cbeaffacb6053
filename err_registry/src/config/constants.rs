pub mod compile_time {
    pub mod codes {
        /// Sentinel returned when registration could not produce a code
        pub const NO_CODE: i32 = -1;

        /// Reserved: a reserved code was hit while registering
        pub const RESERVED_NO_CODE: i32 = 0;

        /// Reserved: the code passed to trigger was not found
        pub const RESERVED_CODE_NOT_FOUND: i32 = 1;

        /// First code handed out to callers unless configured otherwise
        pub const DEFAULT_FIRST_CODE: i32 = 2;
    }

    pub mod messages {
        /// Default text placed before the user-facing message
        pub const DEFAULT_USER_PRE_TEXT: &str = "An Error occured. Details:";

        /// Default text placed after the user-facing message
        pub const DEFAULT_USER_POST_TEXT: &str =
            "For support, please ask the developer of this software.";

        /// Title passed to the notifier for user-facing errors
        pub const NOTIFICATION_TITLE: &str = "Error";

        /// Suffix appended to developer-facing output
        pub const DEV_MESSAGE_SUFFIX: &str = "(Error triggered by ErrorRegistry).";

        /// Dev message of the reserved collision definition
        pub const RESERVED_NO_CODE_DEV: &str =
            "(ErrorRegistry Internal) A reserved error code was reached while calling ErrorRegistry::register(...).";

        /// Dev message of the reserved not-found definition
        pub const RESERVED_CODE_NOT_FOUND_DEV: &str =
            "(ErrorRegistry Internal) The code passed to ErrorRegistry::trigger(...) wasn't found.";

        /// User message shared by both reserved definitions
        pub const RESERVED_USER_MESSAGE: &str = "This is a non-critical error.";
    }

    pub mod report {
        /// Header prefix of the registered-errors report
        pub const HEADER_PREFIX: &str = "Errors (generated: ";

        /// chrono format string for the report timestamp
        pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    }
}
