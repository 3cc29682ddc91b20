//! Per-entity resource adapters and their transfer shapes.

pub mod form;
pub mod form_module;
pub mod module;
pub mod person;
pub mod rol;
pub mod rol_form;
pub mod user;
pub mod user_rol;

pub use form::{CreateFormRequest, FormDto, FormResource, PatchFormRequest, UpdateFormRequest};
pub use form_module::{
    CreateFormModuleRequest, FormModuleDto, FormModuleResource, PatchFormModuleRequest,
    UpdateFormModuleRequest,
};
pub use module::{
    CreateModuleRequest, ModuleDto, ModuleResource, PatchModuleRequest, UpdateModuleRequest,
};
pub use person::{
    CreatePersonRequest, PatchPersonRequest, PersonDto, PersonResource, UpdatePersonRequest,
};
pub use rol::{CreateRolRequest, PatchRolRequest, RolDto, RolResource, UpdateRolRequest};
pub use rol_form::{
    CreateRolFormRequest, PatchRolFormRequest, RolFormDto, RolFormResource, UpdateRolFormRequest,
};
pub use user::{CreateUserRequest, PatchUserRequest, UpdateUserRequest, UserDto, UserResource};
pub use user_rol::{
    CreateUserRolRequest, PatchUserRolRequest, UpdateUserRolRequest, UserRolDto, UserRolResource,
};
