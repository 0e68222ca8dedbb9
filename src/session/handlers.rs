//! Message handlers
//!
//! Each handler runs to completion: update the model, mutate the scene,
//! then repaint the whole surface.

use thiserror::Error;

use crate::session::edit::{CoefficientForm, EditError};
use crate::session::fit::{ApplyError, ClickOutcome, FitError};
use crate::session::messages::{Effect, Msg};
use crate::session::state::AppState;

/// User-visible failures; state is left consistent in every case
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Fit(#[from] FitError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// Handle one message against the application state
pub fn handle_msg(state: &mut AppState, msg: Msg) -> Result<Effect, SessionError> {
    match msg {
        Msg::Click { client_x, client_y } => handle_click(state, client_x, client_y),
        Msg::EditCoefficients(fields) => handle_edit(state, &fields),
        Msg::Redraw => {
            state.repaint();
            Ok(Effect::Repainted)
        }
    }
}

fn handle_click(state: &mut AppState, client_x: f64, client_y: f64) -> Result<Effect, SessionError> {
    let pixel = state.client_to_canvas(client_x, client_y);
    let world = state.renderer.unproject(pixel);
    log::debug!("Click at client ({}, {}) → world {:?}", client_x, client_y, world);
    let (bounds, _) = state.renderer.view();
    if !bounds.contains_point(world) {
        log::debug!("Click at {:?} lies outside the visible area", world);
    }

    let outcome = state.model.handle_click(world, &mut state.scene);
    match outcome {
        Ok(ClickOutcome::Ignored) => Ok(Effect::Nothing),
        Ok(ClickOutcome::Collected(_)) => {
            state.repaint();
            Ok(Effect::Repainted)
        }
        Ok(ClickOutcome::Fitted(coefs)) => {
            state.form = Some(CoefficientForm::from_coefficients(&coefs));
            state.repaint();
            Ok(Effect::FormUpdated)
        }
        Err(err) => {
            // the third point is still shown
            state.repaint();
            Err(err.into())
        }
    }
}

fn handle_edit(state: &mut AppState, fields: &[String; 3]) -> Result<Effect, SessionError> {
    let Some(form) = state.form.as_mut() else {
        return Err(ApplyError::NoParabola.into());
    };
    let coefs = form.submit(fields)?;
    state.model.apply_coefficients(coefs, &mut state.scene)?;
    log::info!("Coefficients edited: a={}, b={}, c={}", coefs.a, coefs.b, coefs.c);
    state.repaint();
    Ok(Effect::FormUpdated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;
    use crate::domain::{Coefficients, Shape, Vec2};
    use approx::assert_relative_eq;

    fn small_state() -> AppState {
        let config = PlotConfig {
            canvas_size: 200,
            ..PlotConfig::default()
        };
        AppState::new(&config).unwrap()
    }

    /// Client position of a world point on the default 200 px surface
    fn click_at(state: &mut AppState, world: Vec2) -> Result<Effect, SessionError> {
        let pixel = state.renderer.project(world);
        handle_msg(
            state,
            Msg::Click {
                client_x: pixel.x,
                client_y: pixel.y,
            },
        )
    }

    fn fitted_state() -> AppState {
        let mut state = small_state();
        click_at(&mut state, Vec2::new(0.0, 0.0)).unwrap();
        click_at(&mut state, Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(
            click_at(&mut state, Vec2::new(2.0, 4.0)).unwrap(),
            Effect::FormUpdated
        );
        state
    }

    fn edit(fields: [&str; 3]) -> Msg {
        Msg::EditCoefficients(fields.map(String::from))
    }

    #[test]
    fn test_clicks_fit_parabola() {
        let state = fitted_state();
        let coefs = state.model.coefficients().unwrap();
        assert_relative_eq!(coefs.a, 1.0, epsilon = 1e-9);
        assert_relative_eq!(coefs.b, 0.0, epsilon = 1e-9);
        assert_relative_eq!(coefs.c, 0.0, epsilon = 1e-9);
        assert_eq!(state.scene.len(), 5);
        assert!(state.form.is_some());
    }

    #[test]
    fn test_fourth_click_changes_nothing() {
        let mut state = fitted_state();
        let before = state.renderer.pixmap().data().to_vec();
        assert_eq!(
            click_at(&mut state, Vec2::new(-3.0, 3.0)).unwrap(),
            Effect::Nothing
        );
        assert_eq!(state.scene.len(), 5);
        assert_eq!(state.model.points().len(), 3);
        assert_eq!(state.renderer.pixmap().data(), &before[..]);
    }

    #[test]
    fn test_valid_edit_replaces_coefficients() {
        let mut state = fitted_state();
        let effect = handle_msg(&mut state, edit(["0.5", "1", "-2"])).unwrap();
        assert_eq!(effect, Effect::FormUpdated);
        let expected = Coefficients::new(0.5, 1.0, -2.0);
        assert_eq!(state.model.coefficients(), Some(expected));
        assert!(
            matches!(&state.scene.shapes()[4], Shape::Parabola(p) if p.coefs == expected)
        );
        assert_eq!(state.scene.len(), 5);
    }

    #[test]
    fn test_invalid_edit_leaves_everything_unchanged() {
        let mut state = fitted_state();
        let coefs = state.model.coefficients();
        let pixels = state.renderer.pixmap().data().to_vec();
        let form = state.form.clone();

        let result = handle_msg(&mut state, edit(["1", "two", "3"]));
        assert!(matches!(result, Err(SessionError::Edit(_))));
        assert_eq!(state.model.coefficients(), coefs);
        assert_eq!(state.scene.len(), 5);
        assert_eq!(state.form, form);
        assert_eq!(state.renderer.pixmap().data(), &pixels[..]);
    }

    #[test]
    fn test_edit_before_fit_is_rejected() {
        let mut state = small_state();
        let result = handle_msg(&mut state, edit(["1", "2", "3"]));
        assert!(matches!(
            result,
            Err(SessionError::Apply(ApplyError::NoParabola))
        ));
        assert_eq!(state.scene.len(), 1);
    }

    #[test]
    fn test_degenerate_clicks_report_error() {
        let mut state = small_state();
        click_at(&mut state, Vec2::new(1.0, 0.0)).unwrap();
        click_at(&mut state, Vec2::new(1.0, 3.0)).unwrap();
        let result = click_at(&mut state, Vec2::new(-2.0, 1.0));
        assert!(matches!(result, Err(SessionError::Fit(_))));
        assert_eq!(state.scene.len(), 4);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut state = fitted_state();
        let before = state.renderer.pixmap().data().to_vec();
        assert_eq!(handle_msg(&mut state, Msg::Redraw).unwrap(), Effect::Repainted);
        assert_eq!(state.renderer.pixmap().data(), &before[..]);
    }
}
