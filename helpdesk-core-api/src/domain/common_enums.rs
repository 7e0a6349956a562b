use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Lifecycle status of a ticket.
///
/// Transitions are forward-only: `New -> InProgress -> Resolved -> Closed`.
/// Re-asserting the current status is a permitted no-op; anything backward
/// or unknown is rejected by the domain service.
///
/// The canonical label for the initial state is "New". The legacy label
/// "Open" is still accepted on parse and normalized to `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "ticket_status", rename_all = "PascalCase"))]
pub enum TicketStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::New,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// The state every ticket is created in.
    pub fn initial() -> Self {
        TicketStatus::New
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, TicketStatus::New)
    }

    /// Resolved and Closed both count as "done" for downstream filtering.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    fn ordinal(&self) -> u8 {
        match self {
            TicketStatus::New => 0,
            TicketStatus::InProgress => 1,
            TicketStatus::Resolved => 2,
            TicketStatus::Closed => 3,
        }
    }

    /// Whether moving to `next` is an allowed transition (same-state is a
    /// no-op and allowed; backward moves are not).
    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        next.ordinal() >= self.ordinal()
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::New => write!(f, "New"),
            TicketStatus::InProgress => write!(f, "In Progress"),
            TicketStatus::Resolved => write!(f, "Resolved"),
            TicketStatus::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(TicketStatus::New),
            // Legacy initial-state label, migrated to "New".
            "Open" => Ok(TicketStatus::New),
            "In Progress" | "InProgress" => Ok(TicketStatus::InProgress),
            "Resolved" => Ok(TicketStatus::Resolved),
            "Closed" => Ok(TicketStatus::Closed),
            _ => Err(()),
        }
    }
}

pub fn serialize_ticket_status<S>(value: &TicketStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize_ticket_status<'de, D>(deserializer: D) -> Result<TicketStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    TicketStatus::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Invalid TicketStatus: {value_str}")))
}

/// Priority assigned by the customer at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "ticket_priority", rename_all = "PascalCase"))]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Critical,
    ];
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "Low"),
            TicketPriority::Medium => write!(f, "Medium"),
            TicketPriority::High => write!(f, "High"),
            TicketPriority::Critical => write!(f, "Critical"),
        }
    }
}

impl FromStr for TicketPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(TicketPriority::Low),
            "Medium" => Ok(TicketPriority::Medium),
            "High" => Ok(TicketPriority::High),
            "Critical" => Ok(TicketPriority::Critical),
            _ => Err(()),
        }
    }
}

pub fn serialize_ticket_priority<S>(
    value: &TicketPriority,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize_ticket_priority<'de, D>(deserializer: D) -> Result<TicketPriority, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    TicketPriority::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Invalid TicketPriority: {value_str}")))
}

/// Category of the support request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "ticket_category", rename_all = "PascalCase"))]
pub enum TicketCategory {
    Technical,
    Billing,
    Account,
    General,
    FeatureRequest,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 5] = [
        TicketCategory::Technical,
        TicketCategory::Billing,
        TicketCategory::Account,
        TicketCategory::General,
        TicketCategory::FeatureRequest,
    ];
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketCategory::Technical => write!(f, "Technical"),
            TicketCategory::Billing => write!(f, "Billing"),
            TicketCategory::Account => write!(f, "Account"),
            TicketCategory::General => write!(f, "General"),
            TicketCategory::FeatureRequest => write!(f, "Feature Request"),
        }
    }
}

impl FromStr for TicketCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Technical" => Ok(TicketCategory::Technical),
            "Billing" => Ok(TicketCategory::Billing),
            "Account" => Ok(TicketCategory::Account),
            "General" => Ok(TicketCategory::General),
            "Feature Request" | "FeatureRequest" => Ok(TicketCategory::FeatureRequest),
            _ => Err(()),
        }
    }
}

pub fn serialize_ticket_category<S>(
    value: &TicketCategory,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize_ticket_category<'de, D>(deserializer: D) -> Result<TicketCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    TicketCategory::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Invalid TicketCategory: {value_str}")))
}

/// Department a richer ticket is filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "department"))]
pub enum Department {
    #[serde(rename = "IT")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "IT"))]
    It,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Finance"))]
    Finance,
    #[serde(rename = "HR")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "HR"))]
    Hr,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "Operations"))]
    Operations,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::It,
        Department::Finance,
        Department::Hr,
        Department::Operations,
    ];
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Department::It => write!(f, "IT"),
            Department::Finance => write!(f, "Finance"),
            Department::Hr => write!(f, "HR"),
            Department::Operations => write!(f, "Operations"),
        }
    }
}

impl FromStr for Department {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IT" => Ok(Department::It),
            "Finance" => Ok(Department::Finance),
            "HR" => Ok(Department::Hr),
            "Operations" => Ok(Department::Operations),
            _ => Err(()),
        }
    }
}

/// Breadth of the disruption behind the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "ticket_impact", rename_all = "PascalCase"))]
pub enum TicketImpact {
    Individual,
    Department,
    Organization,
}

impl TicketImpact {
    pub const ALL: [TicketImpact; 3] = [
        TicketImpact::Individual,
        TicketImpact::Department,
        TicketImpact::Organization,
    ];
}

impl std::fmt::Display for TicketImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketImpact::Individual => write!(f, "Individual"),
            TicketImpact::Department => write!(f, "Department"),
            TicketImpact::Organization => write!(f, "Organization"),
        }
    }
}

impl FromStr for TicketImpact {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Individual" => Ok(TicketImpact::Individual),
            "Department" => Ok(TicketImpact::Department),
            "Organization" => Ok(TicketImpact::Organization),
            _ => Err(()),
        }
    }
}

/// How quickly the customer needs resolution, independent of priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "ticket_urgency", rename_all = "PascalCase"))]
pub enum TicketUrgency {
    Low,
    Medium,
    High,
}

impl TicketUrgency {
    pub const ALL: [TicketUrgency; 3] = [
        TicketUrgency::Low,
        TicketUrgency::Medium,
        TicketUrgency::High,
    ];
}

impl std::fmt::Display for TicketUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketUrgency::Low => write!(f, "Low"),
            TicketUrgency::Medium => write!(f, "Medium"),
            TicketUrgency::High => write!(f, "High"),
        }
    }
}

impl FromStr for TicketUrgency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(TicketUrgency::Low),
            "Medium" => Ok(TicketUrgency::Medium),
            "High" => Ok(TicketUrgency::High),
            _ => Err(()),
        }
    }
}

/// Role of an authenticated actor, fixed at account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "user_role", rename_all = "lowercase"))]
pub enum UserRole {
    Customer,
    Agent,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Customer => write!(f, "customer"),
            UserRole::Agent => write!(f, "agent"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserRole::Customer),
            "agent" => Ok(UserRole::Agent),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_legacy_open_label_as_new() {
        assert_eq!("Open".parse::<TicketStatus>(), Ok(TicketStatus::New));
        assert_eq!("New".parse::<TicketStatus>(), Ok(TicketStatus::New));
        assert_eq!(
            "In Progress".parse::<TicketStatus>(),
            Ok(TicketStatus::InProgress)
        );
        assert!("Reopened".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn status_transitions_are_forward_only() {
        assert!(TicketStatus::New.can_transition_to(TicketStatus::InProgress));
        assert!(TicketStatus::New.can_transition_to(TicketStatus::Closed));
        assert!(TicketStatus::InProgress.can_transition_to(TicketStatus::InProgress));
        assert!(!TicketStatus::Resolved.can_transition_to(TicketStatus::New));
        assert!(!TicketStatus::Closed.can_transition_to(TicketStatus::Resolved));
    }

    #[test]
    fn terminal_states() {
        assert!(TicketStatus::Resolved.is_terminal());
        assert!(TicketStatus::Closed.is_terminal());
        assert!(!TicketStatus::New.is_terminal());
        assert!(TicketStatus::initial().is_initial());
    }

    #[test]
    fn display_round_trips() {
        for status in TicketStatus::ALL {
            assert_eq!(status.to_string().parse::<TicketStatus>(), Ok(status));
        }
        for priority in TicketPriority::ALL {
            assert_eq!(priority.to_string().parse::<TicketPriority>(), Ok(priority));
        }
        for category in TicketCategory::ALL {
            assert_eq!(category.to_string().parse::<TicketCategory>(), Ok(category));
        }
        for department in Department::ALL {
            assert_eq!(department.to_string().parse::<Department>(), Ok(department));
        }
    }
}
