/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! MLA citation formatting.
//!
//! An MLA citation is built from a fixed allow-list of entry fields. The
//! [`selector`] filters an entry down to those fields, drops empty values, and
//! orders what remains canonically; [`fields`] defines the allow-list and how
//! each field is named inside the entry template.

pub mod fields;
pub mod selector;

pub use fields::MlaField;
pub use selector::{select_fields, OrderedFieldSet};
