//! Then steps for "My Tasks" workspace BDD scenarios.

use super::world::MyTasksWorld;
use rstest_bdd_macros::then;
use showrunner::task::views::ViewContent;

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

#[then(r#"the time groups are "{groups}""#)]
fn time_groups_are(world: &MyTasksWorld, groups: String) -> Result<(), eyre::Report> {
    let view = world.view()?;
    let ViewContent::Timeline(timeline) = view.content else {
        return Err(eyre::eyre!("expected the list view"));
    };
    let actual: Vec<_> = timeline.iter().map(|group| group.bucket.as_str()).collect();
    eyre::ensure!(
        actual == split_list(&groups),
        "expected groups {groups}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the visible tasks are "{titles}""#)]
fn visible_tasks_are(world: &MyTasksWorld, titles: String) -> Result<(), eyre::Report> {
    let view = world.view()?;
    let actual: Vec<_> = view.visible.iter().map(|task| task.title()).collect();
    eyre::ensure!(
        actual == split_list(&titles),
        "expected visible tasks {titles}, found {actual:?}"
    );
    Ok(())
}

#[then(
    "the stats show {overdue:u64} overdue, {due_today:u64} due today, {in_progress:u64} in progress and {total:u64} open"
)]
fn stats_show(
    world: &MyTasksWorld,
    overdue: u64,
    due_today: u64,
    in_progress: u64,
    total: u64,
) -> Result<(), eyre::Report> {
    let stats = world.view()?.stats;
    let actual = [stats.overdue, stats.due_today, stats.in_progress, stats.total]
        .map(|count| u64::try_from(count).unwrap_or(u64::MAX));
    eyre::ensure!(
        actual == [overdue, due_today, in_progress, total],
        "unexpected stats {stats:?}"
    );
    Ok(())
}

#[then("the calendar has {cells:u64} cells")]
fn calendar_has_cells(world: &MyTasksWorld, cells: u64) -> Result<(), eyre::Report> {
    let view = world.view()?;
    let ViewContent::Calendar(grid) = view.content else {
        return Err(eyre::eyre!("expected the calendar view"));
    };
    eyre::ensure!(
        u64::try_from(grid.cells().len())? == cells,
        "expected {cells} cells, found {}",
        grid.cells().len()
    );
    Ok(())
}

#[then(r#"the calendar shows "{title}" on "{day}""#)]
fn calendar_shows_task(world: &MyTasksWorld, title: String, day: String) -> Result<(), eyre::Report> {
    let date = showrunner::task::domain::CalendarDate::parse(&day)?;
    let view = world.view()?;
    let ViewContent::Calendar(grid) = view.content else {
        return Err(eyre::eyre!("expected the calendar view"));
    };
    let cell = grid
        .cell_for(date)
        .ok_or_else(|| eyre::eyre!("{day} is not in the calendar grid"))?;
    eyre::ensure!(
        cell.tasks.iter().any(|task| task.title() == title),
        "{title} is not shown on {day}"
    );
    Ok(())
}

#[then("{count:u64} completion calls were issued")]
fn completion_calls_issued(world: &MyTasksWorld, count: u64) -> Result<(), eyre::Report> {
    let report = world
        .last_bulk_completion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no bulk completion has run"))?;
    let calls = world.source.completion_calls()?;
    eyre::ensure!(
        u64::try_from(report.dispatched())? == count && u64::try_from(calls.len())? == count,
        "expected {count} completion calls, report shows {} and source saw {}",
        report.dispatched(),
        calls.len()
    );
    Ok(())
}

#[then("the selection is empty")]
fn selection_is_empty(world: &MyTasksWorld) -> Result<(), eyre::Report> {
    let (_, ui_state, _) = world.loaded()?;
    eyre::ensure!(ui_state.selected().is_empty(), "selection was not cleared");
    Ok(())
}

#[then(r#"the workspace shows the error "{message}""#)]
fn workspace_shows_error(world: &MyTasksWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .snapshot
        .as_ref()
        .and_then(|snapshot| snapshot.error())
        .ok_or_else(|| eyre::eyre!("workspace did not fail to load"))?;
    eyre::ensure!(shown == message, "expected error {message}, found {shown}");
    Ok(())
}
