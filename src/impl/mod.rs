// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod operations_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod operation_model;
        pub(crate) mod raw_amount_model;
        pub(crate) mod tolerant_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod operations_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod operation;
    }
    pub(crate) mod logic {
        pub(crate) mod operation_impl;
        pub(crate) mod operation_selector;
    }
    pub(crate) mod repositories {
        pub(crate) mod operations_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod report_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod account_mask;
    pub(crate) mod operation_fmt;
    pub(crate) mod report_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::operation::*;
        pub use crate::presentation::account_mask::MISSING_ACCOUNT_PLACEHOLDER;
    }
}
