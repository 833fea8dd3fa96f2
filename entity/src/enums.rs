//! String-backed enums shared between the database schema and domain logic.

use sea_orm::entity::prelude::*;

/// School shift a campus entity operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Shift {
    #[sea_orm(string_value = "morning")]
    Morning,
    #[sea_orm(string_value = "afternoon")]
    Afternoon,
    #[sea_orm(string_value = "evening")]
    Evening,
}

impl Shift {
    /// Single-letter shift segment used in registration codes.
    pub fn letter(&self) -> char {
        match self {
            Shift::Morning => 'M',
            Shift::Afternoon => 'A',
            Shift::Evening => 'E',
        }
    }

    /// Resolves a shift segment letter back to its shift.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'M' => Some(Shift::Morning),
            'A' => Some(Shift::Afternoon),
            'E' => Some(Shift::Evening),
            _ => None,
        }
    }

    /// Parses free-form shift input.
    ///
    /// Legacy rosters recorded `"both"` or `"all"` for staff covering multiple
    /// shifts; those normalize to [`Shift::Morning`] so exactly one code is
    /// ever issued per person.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "morning" | "both" | "all" => Some(Shift::Morning),
            "afternoon" => Some(Shift::Afternoon),
            "evening" => Some(Shift::Evening),
            _ => None,
        }
    }
}

/// Employee role, determines the role segment of employee codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StaffRole {
    #[sea_orm(string_value = "teacher")]
    Teacher,
    #[sea_orm(string_value = "coordinator")]
    Coordinator,
    #[sea_orm(string_value = "principal")]
    Principal,
    #[sea_orm(string_value = "superadmin")]
    Superadmin,
}

impl StaffRole {
    /// Single-letter role segment used in employee codes.
    pub fn letter(&self) -> char {
        match self {
            StaffRole::Teacher => 'T',
            StaffRole::Coordinator => 'C',
            StaffRole::Principal => 'P',
            StaffRole::Superadmin => 'S',
        }
    }

    /// Resolves a role segment letter back to its role.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(StaffRole::Teacher),
            'C' => Some(StaffRole::Coordinator),
            'P' => Some(StaffRole::Principal),
            'S' => Some(StaffRole::Superadmin),
            _ => None,
        }
    }
}

/// Lifecycle state of a transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TransferStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "declined")]
    Declined,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl TransferStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransferStatus::Approved | TransferStatus::Declined | TransferStatus::Cancelled
        )
    }

    /// Whether the state machine permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: TransferStatus) -> bool {
        use TransferStatus::*;

        !self.is_terminal()
            && matches!(
                (self, next),
                (Draft, Pending)
                    | (Draft, Cancelled)
                    | (Pending, Approved)
                    | (Pending, Declined)
                    | (Pending, Cancelled)
            )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Draft => "draft",
            TransferStatus::Pending => "pending",
            TransferStatus::Approved => "approved",
            TransferStatus::Declined => "declined",
            TransferStatus::Cancelled => "cancelled",
        }
    }
}

/// What kind of record a transfer request moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TransferSubject {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "teacher")]
    Teacher,
}

/// Academic stage of a level, determines the stage segment of level codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LevelStage {
    #[sea_orm(string_value = "pre_primary")]
    PrePrimary,
    #[sea_orm(string_value = "primary")]
    Primary,
    #[sea_orm(string_value = "secondary")]
    Secondary,
}

impl LevelStage {
    /// Stage segment used in level codes.
    pub fn segment(&self) -> &'static str {
        match self {
            LevelStage::PrePrimary => "L1",
            LevelStage::Primary => "L2",
            LevelStage::Secondary => "L3",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "pre_primary" | "preprimary" | "pre_school" => Some(LevelStage::PrePrimary),
            "primary" => Some(LevelStage::Primary),
            "secondary" => Some(LevelStage::Secondary),
            _ => None,
        }
    }
}

/// Role attached to a login account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[sea_orm(string_value = "superadmin")]
    Superadmin,
    #[sea_orm(string_value = "principal")]
    Principal,
    #[sea_orm(string_value = "coordinator")]
    Coordinator,
    #[sea_orm(string_value = "teacher")]
    Teacher,
    #[sea_orm(string_value = "student")]
    Student,
}

/// Daily attendance outcome for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
    #[sea_orm(string_value = "leave")]
    Leave,
    #[sea_orm(string_value = "late")]
    Late,
}

impl AttendanceStatus {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            "leave" => Some(AttendanceStatus::Leave),
            "late" => Some(AttendanceStatus::Late),
            _ => None,
        }
    }
}
