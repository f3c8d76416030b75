//! The compiled-in curriculum used when no grade table file is configured.

use crate::model::{Course, GradeTable, Semester};

const CURRICULUM: &[(&str, &[(&str, &str, f64)])] = &[
    (
        "1",
        &[
            ("EEE 101", "Electrical Circuits I", 3.0),
            ("EEE 102", "Electrical Circuits I Sessional", 1.5),
            ("PHY 101", "Physics I", 3.0),
            ("PHY 102", "Physics Sessional", 1.5),
            ("MATH 101", "Differential and Integral Calculus", 3.0),
            ("CHEM 101", "Chemistry", 3.0),
            ("CSE 101", "Computer Programming", 3.0),
            ("CSE 102", "Computer Programming Sessional", 1.5),
        ],
    ),
    (
        "2",
        &[
            ("EEE 121", "Electrical Circuits II", 3.0),
            ("EEE 122", "Electrical Circuits II Sessional", 1.5),
            ("PHY 121", "Physics II", 3.0),
            ("MATH 121", "Differential Equations and Matrices", 3.0),
            ("ME 121", "Basic Mechanical Engineering", 3.0),
            ("ME 122", "Engineering Drawing", 1.5),
            ("HUM 121", "English Language", 3.0),
        ],
    ),
    (
        "3",
        &[
            ("EEE 201", "Electronics I", 3.0),
            ("EEE 202", "Electronics I Sessional", 1.5),
            ("EEE 203", "Electrical Machines I", 3.0),
            ("EEE 204", "Electrical Machines I Sessional", 1.5),
            ("MATH 201", "Vector Analysis and Complex Variables", 3.0),
            ("HUM 201", "Economics", 3.0),
            ("CSE 201", "Data Structures and Algorithms", 3.0),
        ],
    ),
    (
        "4",
        &[
            ("EEE 221", "Electronics II", 3.0),
            ("EEE 222", "Electronics II Sessional", 1.5),
            ("EEE 223", "Electrical Machines II", 3.0),
            ("EEE 224", "Electrical Machines II Sessional", 1.5),
            ("EEE 225", "Signals and Linear Systems", 3.0),
            ("EEE 227", "Electromagnetic Fields and Waves", 3.0),
            ("MATH 221", "Probability and Statistics", 3.0),
        ],
    ),
    (
        "5",
        &[
            ("EEE 301", "Digital Electronics", 3.0),
            ("EEE 302", "Digital Electronics Sessional", 1.5),
            ("EEE 303", "Power System I", 3.0),
            ("EEE 304", "Power System I Sessional", 1.5),
            ("EEE 305", "Communication Theory", 3.0),
            ("EEE 306", "Communication Theory Sessional", 0.75),
            ("EEE 307", "Engineering Electromagnetics", 3.0),
            ("HUM 301", "Industrial Management and Accounting", 3.0),
        ],
    ),
    (
        "6",
        &[
            ("EEE 321", "Microprocessors and Interfacing", 3.0),
            ("EEE 322", "Microprocessors and Interfacing Sessional", 1.5),
            ("EEE 323", "Control Systems", 3.0),
            ("EEE 324", "Control Systems Sessional", 1.5),
            ("EEE 325", "Power Electronics", 3.0),
            ("EEE 326", "Power Electronics Sessional", 0.75),
            ("EEE 327", "Digital Signal Processing", 3.0),
            ("EEE 328", "Digital Signal Processing Sessional", 0.75),
        ],
    ),
    (
        "7",
        &[
            ("EEE 401", "Power System II", 3.0),
            ("EEE 403", "VLSI Design", 3.0),
            ("EEE 404", "VLSI Design Sessional", 1.5),
            ("EEE 405", "Renewable Energy Systems", 3.0),
            ("EEE 407", "Optical Communication", 3.0),
            ("EEE 400", "Project and Thesis I", 3.0),
        ],
    ),
    (
        "8",
        &[
            ("EEE 421", "Power Plant Engineering", 3.0),
            ("EEE 423", "Switchgear and Protection", 3.0),
            ("EEE 424", "Switchgear and Protection Sessional", 0.75),
            ("EEE 425", "Wireless and Mobile Communication", 3.0),
            ("EEE 427", "Biomedical Engineering", 3.0),
            ("EEE 420", "Project and Thesis II", 3.0),
        ],
    ),
];

/// The compiled-in eight-semester curriculum on the standard four-point scale.
pub fn builtin_table() -> GradeTable {
    let semesters = CURRICULUM
        .iter()
        .map(|(id, courses)| {
            Semester::new(
                *id,
                courses
                    .iter()
                    .map(|(code, name, credits)| Course::new(*code, *name, *credits))
                    .collect(),
            )
        })
        .collect();
    GradeTable::new(semesters)
}

impl GradeTable {
    /// Shorthand for [`builtin_table`].
    pub fn builtin() -> Self {
        builtin_table()
    }
}
