//! Everything between the raw form controls and the record builder: field
//! ids, snapshots, the repeated-group collector, validation, and the
//! editable form state the desktop UI mutates.

pub mod editable;
pub mod fields;
pub mod groups;
pub mod snapshot;
pub mod validation;
