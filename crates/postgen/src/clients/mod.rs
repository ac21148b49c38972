pub mod openai;

use crate::completions::Completion;
use dyn_clone::DynClone;

pub trait Client: DynClone + Completion + Send + Sync {}

dyn_clone::clone_trait_object!(Client);
