/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fmt;

/// A citation field recognized by the MLA formatter.
///
/// Variants are declared in canonical bibliographic order, so the derived
/// `Ord` is the order fields are processed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MlaField {
    Creators,
    Title,
    Publisher,
    Place,
    Volume,
    Doi,
    Url,
    AccessDate,
    Date,
    Key,
}

impl MlaField {
    /// All fields, in canonical order.
    pub const ALL: [MlaField; 10] = [
        MlaField::Creators,
        MlaField::Title,
        MlaField::Publisher,
        MlaField::Place,
        MlaField::Volume,
        MlaField::Doi,
        MlaField::Url,
        MlaField::AccessDate,
        MlaField::Date,
        MlaField::Key,
    ];

    /// Look up a field by its name in the input JSON.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// The field's name in the input JSON.
    pub fn key(self) -> &'static str {
        match self {
            MlaField::Creators => "creators",
            MlaField::Title => "title",
            MlaField::Publisher => "publisher",
            MlaField::Place => "place",
            MlaField::Volume => "volume",
            MlaField::Doi => "doi",
            MlaField::Url => "url",
            MlaField::AccessDate => "accessDate",
            MlaField::Date => "date",
            MlaField::Key => "key",
        }
    }

    /// The variable name the entry template sees this field under.
    pub fn template_param(self) -> &'static str {
        match self {
            MlaField::Creators => "creators",
            MlaField::Title => "title",
            MlaField::Publisher => "publisher",
            MlaField::Place => "physical_location",
            MlaField::Volume => "volume",
            MlaField::Doi => "doi",
            MlaField::Url => "url",
            MlaField::AccessDate => "accessed_date",
            MlaField::Date => "publication_date",
            MlaField::Key => "entry_id",
        }
    }

    /// Position in canonical order.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MlaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
