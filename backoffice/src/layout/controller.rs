//! Floor-plan position reconciler
//!
//! Keeps an editable in-memory table list in sync with server state while
//! allowing uncommitted local edits, and produces a minimal diff for
//! persistence. Local edits always apply immediately; persistence is a
//! separate, later step the user triggers (optimistic-local,
//! pessimistic-persisted).

use std::collections::HashMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, TablePosition, TablePositionUpdate, TableShape, TableStatus};
use shared::models::dining_table::{UNPLACED, format_rotation};

use super::api::LayoutApi;

/// Position part of a local edit. Omitting `rotation` keeps the table's
/// previous rotation; a drag never silently resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionEdit {
    pub x: f64,
    pub y: f64,
    pub rotation: Option<f64>,
}

impl PositionEdit {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, rotation: None }
    }

    pub fn with_rotation(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation: Some(rotation) }
    }
}

/// Partial update merged into one working-set entry
#[derive(Debug, Clone, Default)]
pub struct TableEdit {
    pub display_name: Option<String>,
    pub shape: Option<TableShape>,
    pub seat_count: Option<u32>,
    pub status: Option<TableStatus>,
    pub position: Option<PositionEdit>,
}

impl TableEdit {
    /// Position-only edit (the drag/drop case)
    pub fn position(edit: PositionEdit) -> Self {
        Self { position: Some(edit), ..Default::default() }
    }
}

/// Owns the layout screen's working copy of one zone's tables.
///
/// - `tables` is replaced wholesale whenever zone data arrives; in-flight
///   edits are never merged back into a reload.
/// - `pending` maps table id to a not-yet-persisted position. Only tables
///   with a locally diverging position appear; repeated edits overwrite.
///   Cleared entirely on successful save, reset, or zone switch.
///
/// Scoped to the layout screen's lifetime: construct on mount, drop on
/// navigation away.
pub struct LayoutController<A: LayoutApi> {
    api: A,
    zone_id: Option<String>,
    tables: Vec<DiningTable>,
    pending: HashMap<String, TablePosition>,
    selected: Option<String>,
}

impl<A: LayoutApi> LayoutController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            zone_id: None,
            tables: Vec::new(),
            pending: HashMap::new(),
            selected: None,
        }
    }

    // ==================== Read surface ====================

    /// Zone the working set belongs to
    pub fn zone_id(&self) -> Option<&str> {
        self.zone_id.as_deref()
    }

    /// The working copy, in display order
    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    /// One entry of the working copy
    pub fn table(&self, id: &str) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Positions edited locally but not yet persisted
    pub fn pending(&self) -> &HashMap<String, TablePosition> {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    // ==================== Server data in ====================

    /// Fetch a zone's layout and load it as the working set
    pub async fn load_zone(&mut self, zone_id: &str) -> AppResult<()> {
        let tables = self.api.fetch_zone_layout(zone_id).await?;
        self.load_from_server(zone_id, tables);
        Ok(())
    }

    /// Replace the working set wholesale with freshly fetched data.
    ///
    /// A refetch of the *same* zone keeps the pending map and selection
    /// (though the table list itself is still replaced, never merged).
    /// A different zone clears both before loading.
    pub fn load_from_server(&mut self, zone_id: &str, tables: Vec<DiningTable>) {
        let zone_changed = self.zone_id.as_deref() != Some(zone_id);
        if zone_changed {
            tracing::debug!(
                from = self.zone_id.as_deref().unwrap_or("-"),
                to = zone_id,
                discarded = self.pending.len(),
                "zone switch"
            );
            self.pending.clear();
            self.selected = None;
            self.zone_id = Some(zone_id.to_string());
        }
        self.tables = tables;
    }

    /// Discard local edits and pending changes; reload server truth for the
    /// current zone. Selection survives if the table still exists.
    pub async fn reset_to_server_truth(&mut self) -> AppResult<()> {
        let zone_id = self
            .zone_id
            .clone()
            .ok_or_else(|| AppError::invalid_request("no zone loaded"))?;
        let tables = self.api.fetch_zone_layout(&zone_id).await?;
        self.pending.clear();
        self.tables = tables;
        if let Some(sel) = &self.selected {
            if !self.tables.iter().any(|t| &t.id == sel) {
                self.selected = None;
            }
        }
        Ok(())
    }

    // ==================== Local edits ====================

    /// Merge a partial update into the working-set entry for `id`.
    ///
    /// Position updates are projected into the pending map (overwriting any
    /// prior entry for that id); everything else never touches it. A
    /// position edit without an explicit rotation keeps the previous one.
    pub fn apply_local_edit(&mut self, id: &str, edit: TableEdit) -> AppResult<()> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::with_message(ErrorCode::TableNotFound, format!("Table {} not in working set", id)))?;

        if let Some(name) = edit.display_name {
            table.display_name = name;
        }
        if let Some(shape) = edit.shape {
            table.shape = shape;
        }
        if let Some(seats) = edit.seat_count {
            table.seat_count = seats;
        }
        if let Some(status) = edit.status {
            table.status = status;
        }

        if let Some(pos) = edit.position {
            let rotation = format_rotation(pos.rotation.unwrap_or(table.position.rotation));
            let position = TablePosition { x: pos.x, y: pos.y, rotation };
            table.position = position;
            self.pending.insert(id.to_string(), position);
        }

        Ok(())
    }

    /// Take a table off the floor plan (back to the library).
    ///
    /// Unlike a placement tweak this is a real state transition, so it is
    /// persisted immediately instead of being staged. The local entry is
    /// updated first and stays updated even if the call fails; the error is
    /// returned for the caller to surface.
    pub async fn remove_from_layout(&mut self, id: &str) -> AppResult<()> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::with_message(ErrorCode::TableNotFound, format!("Table {} not in working set", id)))?;

        table.position = UNPLACED;
        // the sentinel is being persisted right now, nothing left to stage
        self.pending.remove(id);

        if let Err(e) = self.api.update_position(id, UNPLACED).await {
            tracing::warn!(id, error = %e, "failed to persist table removal");
            return Err(e);
        }
        Ok(())
    }

    // ==================== Persistence ====================

    /// Send every pending position as one batch upsert.
    ///
    /// An empty pending map is a no-op with no network call. On success the
    /// map is cleared; on failure it is left untouched so the user may
    /// retry. Returns the number of positions persisted.
    pub async fn commit_pending(&mut self) -> AppResult<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let updates: Vec<TablePositionUpdate> = self
            .pending
            .iter()
            .map(|(id, position)| TablePositionUpdate {
                id: id.clone(),
                position: position.normalized(),
            })
            .collect();
        let count = updates.len();

        match self.api.batch_update_positions(updates).await {
            Ok(()) => {
                tracing::info!(count, "layout changes saved");
                self.pending.clear();
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(count, error = %e, "layout save failed, pending kept");
                Err(e)
            }
        }
    }

    /// Destructive "reset layout" action (confirmed by dialog upstream):
    /// every table goes back to the library, locally and persisted, one
    /// update per table.
    pub async fn reset_layout(&mut self) -> AppResult<()> {
        // local state first: the canvas empties immediately
        let ids: Vec<String> = self.tables.iter().map(|t| t.id.clone()).collect();
        for table in &mut self.tables {
            table.position = UNPLACED;
        }
        self.pending.clear();

        for id in &ids {
            self.api.update_position(id, UNPLACED).await?;
        }
        tracing::info!(count = ids.len(), "layout reset persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Recording mock: counts calls, optionally fails the batch upsert
    #[derive(Default)]
    struct MockApi {
        layouts: HashMap<String, Vec<DiningTable>>,
        fail_batch: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LayoutApi for MockApi {
        async fn fetch_zone_layout(&self, zone_id: &str) -> AppResult<Vec<DiningTable>> {
            self.record(format!("fetch {}", zone_id));
            Ok(self.layouts.get(zone_id).cloned().unwrap_or_default())
        }

        async fn update_position(&self, id: &str, position: TablePosition) -> AppResult<()> {
            self.record(format!("put {} ({},{})", id, position.x, position.y));
            Ok(())
        }

        async fn batch_update_positions(
            &self,
            updates: Vec<TablePositionUpdate>,
        ) -> AppResult<()> {
            self.record(format!("batch {}", updates.len()));
            if self.fail_batch {
                return Err(AppError::network("connection reset"));
            }
            Ok(())
        }
    }

    fn table(id: &str, zone: &str, x: f64, y: f64, rotation: f64) -> DiningTable {
        DiningTable {
            id: id.into(),
            display_name: id.to_uppercase(),
            zone_id: zone.into(),
            shape: TableShape::Rectangle,
            seat_count: 4,
            status: TableStatus::Available,
            position: TablePosition { x, y, rotation },
            is_active: true,
        }
    }

    fn controller_with(zone: &str, tables: Vec<DiningTable>) -> LayoutController<MockApi> {
        let mut api = MockApi::default();
        api.layouts.insert(zone.to_string(), tables);
        let mut c = LayoutController::new(api);
        let fetched = c.api.layouts.get(zone).cloned().unwrap();
        c.load_from_server(zone, fetched);
        c
    }

    #[test]
    fn non_position_edits_leave_pending_untouched() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 10.0, 20.0, 45.0)]);

        c.apply_local_edit(
            "t1",
            TableEdit {
                display_name: Some("Window 1".into()),
                seat_count: Some(6),
                status: Some(TableStatus::Reserved),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(c.pending().is_empty());
        let t = c.table("t1").unwrap();
        assert_eq!(t.display_name, "Window 1");
        assert_eq!(t.seat_count, 6);
    }

    #[test]
    fn position_edit_preserves_rotation() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 10.0, 20.0, 45.0)]);

        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(100.0, 50.0)))
            .unwrap();

        let t = c.table("t1").unwrap();
        assert_eq!(t.position.x, 100.0);
        assert_eq!(t.position.rotation, 45.0);
        assert_eq!(c.pending()["t1"].rotation, 45.0);
    }

    #[test]
    fn repeated_edits_overwrite_pending_entry() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 0.0, 0.0, 0.0)]);

        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(10.0, 10.0)))
            .unwrap();
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::with_rotation(20.0, 30.0, 450.0)))
            .unwrap();

        assert_eq!(c.pending().len(), 1);
        let p = c.pending()["t1"];
        assert_eq!((p.x, p.y), (20.0, 30.0));
        // 450 normalized into [0, 360)
        assert_eq!(p.rotation, 90.0);
    }

    #[tokio::test]
    async fn commit_on_empty_pending_makes_no_network_call() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 0.0, 0.0, 0.0)]);

        assert_eq!(c.commit_pending().await.unwrap(), 0);
        assert!(c.api.calls().is_empty());
    }

    #[tokio::test]
    async fn commit_success_clears_pending() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 0.0, 0.0, 0.0)]);
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(5.0, 5.0)))
            .unwrap();

        assert_eq!(c.commit_pending().await.unwrap(), 1);
        assert!(c.pending().is_empty());
        assert_eq!(c.api.calls(), vec!["batch 1"]);
    }

    #[tokio::test]
    async fn commit_failure_leaves_pending_unchanged() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 0.0, 0.0, 0.0)]);
        c.api.fail_batch = true;
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(5.0, 5.0)))
            .unwrap();
        let before = c.pending().clone();

        assert!(c.commit_pending().await.is_err());
        assert_eq!(c.pending(), &before);
    }

    #[tokio::test]
    async fn zone_switch_discards_pending_edits() {
        let mut api = MockApi::default();
        api.layouts
            .insert("a".into(), vec![table("t1", "a", 0.0, 0.0, 0.0)]);
        api.layouts
            .insert("b".into(), vec![table("t9", "b", 1.0, 1.0, 0.0)]);
        let mut c = LayoutController::new(api);

        c.load_zone("a").await.unwrap();
        c.select(Some("t1".into()));
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(99.0, 99.0)))
            .unwrap();
        assert!(c.has_pending());

        c.load_zone("b").await.unwrap();
        assert!(c.pending().is_empty());
        assert_eq!(c.selected(), None);
        assert_eq!(c.tables().len(), 1);
        assert_eq!(c.tables()[0].id, "t9");
    }

    #[tokio::test]
    async fn same_zone_refetch_keeps_pending() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 0.0, 0.0, 0.0)]);
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(7.0, 7.0)))
            .unwrap();

        c.load_zone("z1").await.unwrap();
        // working set replaced wholesale, pending survives
        assert_eq!(c.table("t1").unwrap().position.x, 0.0);
        assert_eq!(c.pending()["t1"].x, 7.0);
    }

    #[tokio::test]
    async fn remove_from_layout_persists_immediately() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 40.0, 40.0, 90.0)]);
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(41.0, 40.0)))
            .unwrap();

        c.remove_from_layout("t1").await.unwrap();

        let t = c.table("t1").unwrap();
        assert!(t.position.is_unplaced());
        assert_eq!(t.position.rotation, 0.0);
        assert!(c.pending().is_empty());
        assert_eq!(c.api.calls(), vec!["put t1 (-1,-1)"]);
    }

    #[tokio::test]
    async fn reset_layout_unplaces_every_table_with_one_put_each() {
        let mut c = controller_with(
            "z1",
            vec![
                table("t1", "z1", 10.0, 10.0, 0.0),
                table("t2", "z1", 20.0, 20.0, 180.0),
                table("t3", "z1", 30.0, 30.0, 0.0),
            ],
        );
        c.apply_local_edit("t2", TableEdit::position(PositionEdit::new(25.0, 25.0)))
            .unwrap();

        c.reset_layout().await.unwrap();

        assert!(c.tables().iter().all(|t| t.position.is_unplaced()));
        assert!(c.pending().is_empty());
        let puts: Vec<_> = c
            .api
            .calls()
            .into_iter()
            .filter(|call| call.starts_with("put"))
            .collect();
        assert_eq!(puts.len(), 3);
    }

    #[tokio::test]
    async fn reset_to_server_truth_discards_local_state() {
        let mut c = controller_with("z1", vec![table("t1", "z1", 10.0, 10.0, 0.0)]);
        c.apply_local_edit("t1", TableEdit::position(PositionEdit::new(99.0, 99.0)))
            .unwrap();

        c.reset_to_server_truth().await.unwrap();
        assert!(c.pending().is_empty());
        assert_eq!(c.table("t1").unwrap().position.x, 10.0);
    }
}
