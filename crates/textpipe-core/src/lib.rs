pub mod args;
pub mod flatten;
pub mod pipeline;
pub mod record;
pub mod stage;
pub mod value;

pub use args::{ArgError, StageArgs};
pub use flatten::{Flattened, flatten, flatten_owned};
pub use pipeline::{Pipeline, compose};
pub use record::{OUTCOME_KEY, Record};
pub use stage::Stage;
pub use value::Value;
