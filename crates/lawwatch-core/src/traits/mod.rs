//! Repository traits (ports)

mod repositories;

pub use repositories::{ArticleRepository, ChangeEventRepository, RepoResult};
