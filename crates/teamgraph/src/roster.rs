//! Roster index: groups players by (team, year).
//!
//! The index is the intermediate step between raw rows and the graph. It is
//! built once and consumed by [`crate::graph::PlayerGraph::from_index`].

use crate::domain::{Player, PlayerId, RosterRecord, TeamYear};
use crate::error::{MalformedReason, MalformedRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Co-membership groups and player attributes derived from roster rows.
#[derive(Debug, Default, Clone)]
pub struct RosterIndex {
    groups: BTreeMap<TeamYear, BTreeSet<PlayerId>>,
    players: BTreeMap<PlayerId, Player>,
    skipped: Vec<MalformedRecord>,
}

impl RosterIndex {
    /// Build an index from rows in input order.
    ///
    /// Rows missing a player id, team, or year are recorded in
    /// [`skipped`](Self::skipped) and otherwise ignored. A player listed
    /// twice under the same key appears once in that group.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RosterRecord>,
    {
        let mut index = Self::default();
        for (position, record) in records.into_iter().enumerate() {
            if let Err(reason) = index.insert(record) {
                tracing::warn!(position, %reason, "Skipping malformed roster record");
                index.skipped.push(MalformedRecord { position, reason });
            }
        }

        tracing::info!(
            groups = index.groups.len(),
            players = index.players.len(),
            skipped = index.skipped.len(),
            "Built roster index"
        );
        index
    }

    fn insert(&mut self, record: RosterRecord) -> Result<(), MalformedReason> {
        let player_id = non_blank(record.player_id).ok_or(MalformedReason::MissingPlayerId)?;
        let team = non_blank(record.team).ok_or(MalformedReason::MissingTeam)?;
        let year = record.year.ok_or(MalformedReason::MissingYear)?;
        let id = PlayerId::new(player_id);

        self.groups
            .entry(TeamYear::new(team, year))
            .or_default()
            .insert(id.clone());

        // First non-empty name and first number seen win.
        let player = self.players.entry(id.clone()).or_insert_with(|| Player {
            id,
            name: None,
            number: None,
        });
        if player.name.is_none() {
            player.name = non_blank(record.name);
        }
        if player.number.is_none() {
            player.number = record.number;
        }

        Ok(())
    }

    /// Co-membership groups, ordered by key.
    #[must_use]
    pub fn groups(&self) -> &BTreeMap<TeamYear, BTreeSet<PlayerId>> {
        &self.groups
    }

    /// Player attributes, ordered by ID.
    #[must_use]
    pub fn players(&self) -> &BTreeMap<PlayerId, Player> {
        &self.players
    }

    /// Rows that were rejected.
    #[must_use]
    pub fn skipped(&self) -> &[MalformedRecord] {
        &self.skipped
    }

    /// Number of distinct (team, year) keys.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Split the index into its parts.
    pub(crate) fn into_parts(
        self,
    ) -> (
        BTreeMap<TeamYear, BTreeSet<PlayerId>>,
        BTreeMap<PlayerId, Player>,
        Vec<MalformedRecord>,
    ) {
        (self.groups, self.players, self.skipped)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
