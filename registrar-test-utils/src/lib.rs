pub mod builder;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        test_setup_with_school_tables, test_setup_with_tables, TestBuilder, TestError, TestSetup,
    };
}
