pub mod generic;
pub mod provider;

pub use generic::Repository;
pub use provider::{
    FormModuleRepository, FormRepository, ModuleRepository, PersonRepository, RepositoryProvider,
    RolFormRepository, RolRepository, UserRepository, UserRolRepository,
};
