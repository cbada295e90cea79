//! The roster as it was first hand-maintained: the base table followed by
//! supplemental assignments. `-` and `None` both mean "nobody assigned".

use super::source::{RosterLayout, RosterSource};
use super::RosterRecord;
use crate::error::Result;
use async_trait::async_trait;

pub const LABEL_COLUMN: &str = "State";
pub const ACCOUNT_EXECUTIVE: &str = "Account Executive";
pub const ACCOUNT_MANAGER: &str = "Account Manager";
pub const PROJECT_MANAGER: &str = "Project Manager";

type Row = (
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
    Option<&'static str>,
);

/// (State, Account Executive, Account Manager, Project Manager)
const BASE_ROWS: &[Row] = &[
    ("TX", Some("Scott Kear"), Some("Tony Deleon"), Some("Tammy Vaughn")),
    ("TX", Some("-"), Some("Sam Belvedere"), Some("Tammy Vaughn")),
    ("TX", Some("Austin Black"), Some("Matt Kirchenbauer"), Some("Tammy Vaughn")),
    ("TX", Some("Nathan Savage"), Some("Connor Woodward"), Some("Tammy Vaughn")),
    ("TX", None, None, None),
    ("OK/KS/MO", None, None, Some("Tammy Vaughn")),
    ("GA/AL", None, Some("Connor Woodward"), Some("Frank Uzzolino")),
    ("GA/AL", None, Some("Anna Sappleton"), Some("Frank Uzzolino")),
    ("AR/MS/N. LA", None, Some("Kirby Danuser"), Some("Tammy Vaughn")),
    ("IL/IA/WI", Some("Matt Bustin"), Some("Noah Baldwin"), Some("Frank Uzzolino")),
    ("MN", Some("Scott Larson"), Some("Noah Baldwin"), Some("Frank Uzzolino")),
    ("TN/KY", Some("Jamie Martin"), Some("Kirby Danuser"), Some("Frank Uzzolino")),
    ("FL", Some("Jared Johnston"), Some("Alex Escribano"), Some("Edwin Dominguez")),
    ("FL", Some("-"), Some("Sophia Vera"), Some("Edwin Dominguez")),
    ("FL", Some("-"), Some("Anna Sappleton"), Some("Frank Uzzolino")),
    ("Indy/MI", Some("Oak Andrews"), Some("Bob Owen"), Some("Frank Uzzolino")),
    ("PA/OH", Some("Phil Beohm"), Some("Bob Owen"), Some("Frank Uzzolino")),
    ("VA/DC", Some("Sean Souso"), Some("Kirby Danuser"), Some("Frank Uzzolino")),
    ("NC", Some("Antoinette Norton"), Some("Lisa Schalabba"), Some("Frank Uzzolino")),
    ("AZ", None, Some("Austin Woodward"), Some("Mike Klug")),
    ("OR-WA", None, Some("Izzy"), Some("Mike Klug")),
    ("S. CA", Some("Ryan Hancock"), Some("Ryan Yohe"), Some("Mike Klug")),
    ("N. CA", Some("Gary Carter"), Some("Ryan Yohe"), Some("Mike Klug")),
    ("CO", None, Some("Dalton"), Some("Mike Klug")),
    ("UT/ID", Some("Mckay Worthen"), Some("Mike Stewart"), Some("Mike Klug")),
];

/// Assignments added after the base table; appended in this order.
const SUPPLEMENT_ROWS: &[Row] = &[
    ("NV", None, Some("Dalton"), None),
    ("AZ", Some("Mike B"), None, None),
    ("TX", Some("Mike B"), None, None),
    ("CA", Some("Mike B"), None, None),
    ("NV", Some("Mike B"), None, None),
    ("IN", Some("Oak Andrews"), Some("Bob Owen"), Some("Frank Uzzolino")),
];

/// Embedded roster used when no roster file is given
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRoster;

impl BuiltinRoster {
    pub fn row_count() -> usize {
        BASE_ROWS.len() + SUPPLEMENT_ROWS.len()
    }
}

fn cell(row: &Row, column: &str) -> Option<String> {
    let (state, ae, am, pm) = *row;
    match column {
        LABEL_COLUMN => Some(state),
        ACCOUNT_EXECUTIVE => ae,
        ACCOUNT_MANAGER => am,
        PROJECT_MANAGER => pm,
        _ => None,
    }
    .map(str::to_string)
}

#[async_trait]
impl RosterSource for BuiltinRoster {
    fn name(&self) -> String {
        "built-in roster".to_string()
    }

    async fn load(&self, layout: &RosterLayout) -> Result<Vec<RosterRecord>> {
        Ok(BASE_ROWS
            .iter()
            .chain(SUPPLEMENT_ROWS)
            .map(|row| layout.build_record(|column| cell(row, column)))
            .collect())
    }
}
