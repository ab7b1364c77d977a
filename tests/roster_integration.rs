use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use roster_cli::{LoadState, Member, RosterError, RosterResult, RosterSource, RosterStore, SortKey, Team};

/// In-memory source that counts how often it is asked.
struct FixtureSource {
    teams: RosterResult<Vec<Team>>,
    members: Vec<Member>,
    calls: AtomicUsize,
}

impl FixtureSource {
    fn new(teams: Vec<Team>, members: Vec<Member>) -> Self {
        Self { teams: Ok(teams), members, calls: AtomicUsize::new(0) }
    }

    fn failing_teams(members: Vec<Member>) -> Self {
        Self {
            teams: Err(RosterError::ApiError("GET /posts failed with status 500".to_string())),
            members,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RosterSource for FixtureSource {
    async fn fetch_teams(&self) -> RosterResult<Vec<Team>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.teams {
            Ok(teams) => Ok(teams.clone()),
            Err(e) => Err(RosterError::ApiError(e.to_string())),
        }
    }

    async fn fetch_members(&self) -> RosterResult<Vec<Member>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.clone())
    }
}

fn alice() -> Member {
    Member { id: 7, name: "Alice".to_string(), email: "alice@example.com".to_string() }
}

#[tokio::test]
async fn test_sort_assign_remove_scenario() {
    let source = FixtureSource::new(
        vec![Team::new(1, "B", "second"), Team::new(2, "A", "first")],
        vec![alice()],
    );
    let mut store = RosterStore::new();
    store.load(&source).await.unwrap();
    assert_eq!(store.load_state(), &LoadState::Ready);

    store.set_sort_by(SortKey::Title);
    let order: Vec<i64> = store.paginated_teams().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![2, 1]);

    store.assign_member_to_team(1, 7);
    assert_eq!(store.team(1).unwrap().assigned_member_ids, vec![7]);

    store.remove_member_from_team(1, 7);
    assert!(store.team(1).unwrap().assigned_member_ids.is_empty());
}

#[tokio::test]
async fn test_load_runs_once() {
    let source = FixtureSource::new(vec![Team::new(1, "B", "")], vec![alice()]);
    let mut store = RosterStore::new();

    store.load(&source).await.unwrap();
    store.assign_member_to_team(1, 7);
    store.load(&source).await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    // A second load would have wiped the relation
    assert_eq!(store.team(1).unwrap().assigned_member_ids, vec![7]);
}

#[tokio::test]
async fn test_failed_teams_fetch_still_applies_members() {
    let source = FixtureSource::failing_teams(vec![alice()]);
    let mut store = RosterStore::new();

    let result = store.load(&source).await;
    assert!(matches!(result, Err(RosterError::ApiError(_))));
    assert!(store.all_teams().is_empty());
    assert!(store.paginated_teams().is_empty());
    assert_eq!(store.all_members().len(), 1);
    assert!(matches!(store.load_state(), LoadState::Failed(_)));
}

#[tokio::test]
async fn test_load_through_trait_object() {
    let source: Box<dyn RosterSource> = Box::new(FixtureSource::new(
        (1..=11).map(|id| Team::new(id, format!("Team {:02}", id), "")).collect(),
        vec![],
    ));
    let mut store = RosterStore::new();
    store.load(source.as_ref()).await.unwrap();

    assert_eq!(store.total_pages(), 3);
    store.set_current_page(3);
    assert_eq!(store.paginated_teams().len(), 1);
}

#[test]
fn test_sorting_by_title_keeps_ids_and_relations() {
    let mut store = RosterStore::with_data(
        vec![Team::new(1, "Zeta", ""), Team::new(2, "Alpha", ""), Team::new(3, "Mu", "")],
        vec![alice()],
    );
    store.assign_member_to_team(3, 7);
    let before = store.all_teams().to_vec();

    store.set_sort_by(SortKey::Title);
    let titles: Vec<&str> = store.sorted_teams().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Mu", "Zeta"]);

    for team in store.sorted_teams() {
        let original = before.iter().find(|t| t.id == team.id).unwrap();
        assert_eq!(team.assigned_member_ids, original.assigned_member_ids);
    }
}
