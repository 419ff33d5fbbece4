//! Swap entity: a request to exchange an item for another item or for points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::{SwapError, ValidationError};

/// How the requester pays for the requested item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapKind {
    /// One of the requester's own items is offered in exchange
    Item,
    /// The requester pays with points
    Points,
}

impl SwapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapKind::Item => "item",
            SwapKind::Points => "points",
        }
    }
}

impl std::str::FromStr for SwapKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" => Ok(SwapKind::Item),
            "points" => Ok(SwapKind::Points),
            _ => Err(ValidationError::InvalidValue {
                field: "kind".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Lifecycle state of a swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Accepted => "accepted",
            SwapStatus::Rejected => "rejected",
            SwapStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, SwapStatus::Pending)
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SwapStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SwapStatus::Pending),
            "accepted" => Ok(SwapStatus::Accepted),
            "rejected" => Ok(SwapStatus::Rejected),
            "cancelled" => Ok(SwapStatus::Cancelled),
            _ => Err(ValidationError::InvalidValue {
                field: "status".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A swap request between a requester and the owner of the requested item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub id: Uuid,
    pub requested_item_id: Uuid,
    /// Offered item; `None` for points swaps
    pub offered_item_id: Option<Uuid>,
    pub requester_id: Uuid,
    pub owner_id: Uuid,
    pub kind: SwapKind,
    /// Points offered, zero for item swaps
    pub points: i64,
    pub status: SwapStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Swap {
    /// Creates a pending item-for-item swap
    pub fn for_item(requested_item_id: Uuid, offered_item_id: Uuid, requester_id: Uuid, owner_id: Uuid) -> Self {
        Self::pending(requested_item_id, Some(offered_item_id), requester_id, owner_id, SwapKind::Item, 0)
    }

    /// Creates a pending points swap
    pub fn for_points(requested_item_id: Uuid, requester_id: Uuid, owner_id: Uuid, points: i64) -> Self {
        Self::pending(requested_item_id, None, requester_id, owner_id, SwapKind::Points, points)
    }

    fn pending(
        requested_item_id: Uuid,
        offered_item_id: Option<Uuid>,
        requester_id: Uuid,
        owner_id: Uuid,
        kind: SwapKind,
        points: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            requested_item_id,
            offered_item_id,
            requester_id,
            owner_id,
            kind,
            points,
            status: SwapStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Items tied up by this swap
    pub fn item_ids(&self) -> Vec<Uuid> {
        std::iter::once(self.requested_item_id)
            .chain(self.offered_item_id)
            .collect()
    }

    pub fn involves(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id || self.owner_id == user_id
    }

    /// Checks that `action` may move this swap out of `pending`
    pub fn ensure_pending(&self, action: &str) -> Result<(), SwapError> {
        if self.status.is_final() {
            return Err(SwapError::InvalidTransition {
                action: action.to_string(),
                status: self.status.to_string(),
            });
        }
        Ok(())
    }

    pub fn transition(&mut self, status: SwapStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_swap_tracks_both_items() {
        let (requested, offered) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = Swap::for_item(requested, offered, Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(swap.kind, SwapKind::Item);
        assert_eq!(swap.item_ids(), vec![requested, offered]);
        assert_eq!(swap.points, 0);
    }

    #[test]
    fn test_points_swap_tracks_requested_item_only() {
        let requested = Uuid::new_v4();
        let swap = Swap::for_points(requested, Uuid::new_v4(), Uuid::new_v4(), 25);
        assert_eq!(swap.item_ids(), vec![requested]);
        assert_eq!(swap.points, 25);
        assert_eq!(swap.status, SwapStatus::Pending);
    }

    #[test]
    fn test_ensure_pending_rejects_final_states() {
        let mut swap = Swap::for_points(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), 10);
        assert!(swap.ensure_pending("accept").is_ok());

        swap.transition(SwapStatus::Rejected);
        assert_eq!(
            swap.ensure_pending("accept"),
            Err(SwapError::InvalidTransition {
                action: "accept".to_string(),
                status: "rejected".to_string(),
            })
        );
    }

    #[test]
    fn test_involves() {
        let (requester, owner) = (Uuid::new_v4(), Uuid::new_v4());
        let swap = Swap::for_points(Uuid::new_v4(), requester, owner, 10);
        assert!(swap.involves(requester));
        assert!(swap.involves(owner));
        assert!(!swap.involves(Uuid::new_v4()));
    }
}
