use strum::IntoStaticStr;

/// Letter grade awarded for a marks value.
///
/// Discriminants ascend with quality so `Ord` compares grades naturally
/// (`Grade::A > Grade::B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoStaticStr)]
#[repr(u8)]
pub enum Grade {
    F = 0,
    D = 1,
    C = 2,
    B = 3,
    A = 4,
}

impl Grade {
    /// All grades in report display order.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Map marks to a letter grade.
    ///
    /// Band lower bounds are inclusive: >=90 A, >=80 B, >=70 C, >=60 D,
    /// everything below F.
    pub fn from_marks(marks: u8) -> Self {
        if marks >= 90 {
            Self::A
        } else if marks >= 80 {
            Self::B
        } else if marks >= 70 {
            Self::C
        } else if marks >= 60 {
            Self::D
        } else {
            Self::F
        }
    }

    pub fn letter(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
