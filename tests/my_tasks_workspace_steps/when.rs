//! When steps for "My Tasks" workspace BDD scenarios.

use super::world::{MyTasksWorld, run_async, service_for};
use rstest_bdd_macros::when;

#[when("the workspace loads")]
fn workspace_loads(world: &mut MyTasksWorld) -> Result<(), eyre::Report> {
    let today = world
        .today
        .ok_or_else(|| eyre::eyre!("missing scenario day"))?;
    let service = service_for(&world.source, today)?;
    world.snapshot = Some(run_async(service.load()));
    world.ui_state = Some(service.initial_state());
    world.service = Some(service);
    Ok(())
}

#[when(r#"the user searches for "{text}""#)]
fn user_searches(world: &mut MyTasksWorld, text: String) -> Result<(), eyre::Report> {
    let ui_state = world
        .ui_state
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing UI state in scenario world"))?;
    ui_state.set_search(text);
    Ok(())
}

#[when("the user opens the calendar for the next month")]
fn user_opens_next_month(world: &mut MyTasksWorld) -> Result<(), eyre::Report> {
    let ui_state = world
        .ui_state
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing UI state in scenario world"))?;
    ui_state.set_view_mode(showrunner::task::views::ViewMode::Calendar);
    ui_state.calendar_next();
    Ok(())
}

#[when("the user selects every visible task")]
fn user_selects_everything(world: &mut MyTasksWorld) -> Result<(), eyre::Report> {
    let visible_ids: Vec<_> = world.view()?.visible.iter().map(|task| task.id()).collect();
    let ui_state = world
        .ui_state
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing UI state in scenario world"))?;
    for id in visible_ids {
        ui_state.toggle_selected(id);
    }
    Ok(())
}

#[when("the user completes the selection")]
fn user_completes_selection(world: &mut MyTasksWorld) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("workspace has not been loaded"))?;
    let ui_state = world
        .ui_state
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing UI state in scenario world"))?;
    let report = run_async(service.complete_selected(ui_state));
    world.last_bulk_completion = Some(report);
    Ok(())
}
