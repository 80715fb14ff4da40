//! Admin form layer.
//!
//! Synthesizes create/edit forms for admin-managed entities. Relationship
//! metadata is declared statically per entity ([`descriptor`]) instead of
//! being discovered through runtime reflection; for every declared
//! relationship not already bound to a form field, [`view::ModelView`]
//! injects a single-choice field whose options come from the related table.

pub mod choice;
pub mod descriptor;
pub mod site;
pub mod view;

pub use choice::{Choice, FormField};
pub use descriptor::{AdminModel, AdminRow, RelationDescriptor};
pub use site::AdminSite;
pub use view::{FormSchema, ModelView};
