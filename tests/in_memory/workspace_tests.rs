//! In-memory integration tests for the "My Tasks" workspace.

use std::sync::Arc;

use rstest::rstest;
use showrunner::task::{
    adapters::memory::{FixedClock, InMemoryTaskSource},
    domain::{Task, TaskStatus},
    views::{TaskStats, TimeBucket, ViewContent, ViewMode},
};

use super::helpers::{clock, date, service_over, source};

/// Loads the snapshot or fails the test with the rendered error.
///
/// # Errors
///
/// Returns an error if the service reports a failed fetch.
async fn load_snapshot(
    service: &super::helpers::TestService,
) -> Result<Vec<Task>, eyre::Report> {
    let state = service.load().await;
    state
        .tasks()
        .map(<[Task]>::to_vec)
        .ok_or_else(|| eyre::eyre!("fetch failed: {:?}", state.error()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_view_buckets_the_open_backlog(
    source: InMemoryTaskSource,
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let (service, _) = service_over(&source, clock);
    let tasks = load_snapshot(&service).await?;
    let state = service.initial_state();

    let view = service.view(&tasks, &state);

    eyre::ensure!(
        view.stats
            == TaskStats {
                overdue: 1,
                due_today: 1,
                in_progress: 1,
                total: 5,
            },
        "unexpected stats {:?}",
        view.stats
    );
    let ViewContent::Timeline(groups) = view.content else {
        return Err(eyre::eyre!("list mode must render the timeline"));
    };
    let buckets: Vec<_> = groups.iter().map(|group| group.bucket).collect();
    assert_eq!(
        buckets,
        vec![
            TimeBucket::Overdue,
            TimeBucket::Today,
            TimeBucket::Tomorrow,
            TimeBucket::NextWeek,
            TimeBucket::Later,
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_view_ranks_projects_and_search_narrows_them(
    source: InMemoryTaskSource,
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let (service, _) = service_over(&source, clock);
    let tasks = load_snapshot(&service).await?;
    let mut state = service.initial_state();
    state.set_view_mode(ViewMode::ByProject);

    let ViewContent::Projects(groups) = service.view(&tasks, &state).content else {
        return Err(eyre::eyre!("project mode must render project groups"));
    };
    let names: Vec<_> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, vec!["Harbour Festival", "Winter Gala", "No Project"]);

    state.set_search("FESTIVAL");
    let narrowed = service.view(&tasks, &state);
    assert_eq!(narrowed.visible.len(), 3);
    assert_eq!(narrowed.stats.total, 5);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn calendar_view_places_open_tasks_on_their_days(
    source: InMemoryTaskSource,
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let (service, _) = service_over(&source, clock);
    let tasks = load_snapshot(&service).await?;
    let mut state = service.initial_state();
    state.set_view_mode(ViewMode::Calendar);

    let ViewContent::Calendar(grid) = service.view(&tasks, &state).content else {
        return Err(eyre::eyre!("calendar mode must render the grid"));
    };
    let attached: usize = grid.cells().iter().map(|cell| cell.tasks.len()).sum();
    assert_eq!(attached, 4);
    let done_day = grid
        .cell_for(date("2025-01-02"))
        .ok_or_else(|| eyre::eyre!("January 2 is in the grid"))?;
    assert!(done_day.tasks.is_empty());

    state.calendar_next();
    let ViewContent::Calendar(february) = service.view(&tasks, &state).content else {
        return Err(eyre::eyre!("calendar mode must render the grid"));
    };
    assert_eq!(february.month().month(), 2);
    assert!(february.cells().iter().all(|cell| cell.tasks.is_empty()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_selected_tasks_updates_the_source(
    source: InMemoryTaskSource,
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let (service, _) = service_over(&source, clock);
    let tasks = load_snapshot(&service).await?;
    let mut state = service.initial_state();
    let view = service.view(&tasks, &state);
    let overdue_and_today: Vec<_> = view.visible.iter().take(2).map(|task| task.id()).collect();
    for id in &overdue_and_today {
        state.toggle_selected(*id);
    }

    let report = service.complete_selected(&mut state).await;

    assert_eq!(report.dispatched(), 2);
    assert!(report.failed.is_empty());
    assert!(state.selected().is_empty());
    let mut calls = source.completion_calls()?;
    calls.sort();
    let mut expected = overdue_and_today.clone();
    expected.sort();
    assert_eq!(calls, expected);

    let refreshed = load_snapshot(&service).await?;
    let stats = service.view(&refreshed, &state).stats;
    assert_eq!(stats.overdue, 0);
    assert_eq!(stats.total, 3);
    assert!(
        refreshed
            .iter()
            .filter(|task| overdue_and_today.contains(&task.id()))
            .all(|task| task.status() == TaskStatus::Done)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_completion_clears_selection_even_when_calls_fail(
    source: InMemoryTaskSource,
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let (service, _) = service_over(&source, clock);
    let tasks = load_snapshot(&service).await?;
    let mut state = service.initial_state();
    state.select_all(&tasks);
    source.fail_with("upstream 503")?;

    let report = service.complete_selected(&mut state).await;

    assert_eq!(report.dispatched(), tasks.len());
    assert_eq!(report.failed.len(), tasks.len());
    assert!(state.selected().is_empty());
    Ok(())
}
