//! External collaborators reached from the browser. Today that is only the
//! contact submission capability.

pub mod contact;
