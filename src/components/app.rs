use crate::actions::{
    closest_action, Action, ActionHandler, ActionMessages, ActionState, ACTION_ATTRIBUTE,
};
use crate::analytics::track_action;
use crate::components::{attach_toasts, FeatureCards, Hero, SiteFooter, SiteHeader, StoreSection};
use crate::config::LandingConfig;
use crate::dom::{self, DomNode};
use crate::effects::{self, click_origin, focus_section};
use crate::geometry::{Point, Rect};
use crate::haptics::tap_feedback;
use crate::shortcuts::{Modifiers, Shortcut};
use crate::storage::LocalStore;
use crate::timer::BrowserScheduler;
use crate::toast::Toaster;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn App(config: LandingConfig, reduced_motion: bool) -> impl IntoView {
    let toaster = Toaster::new(Rc::new(BrowserScheduler), config.toast_exit_ms);
    attach_toasts(&toaster);

    // Counters loaded once; the handler owns them from here on
    let state = ActionState::load(LocalStore::open());
    let (badge, set_badge) = create_signal(state.badge_text());
    let handler = Rc::new(RefCell::new(ActionHandler::new(
        state,
        toaster.clone(),
        ActionMessages {
            bargain: config.bargain_message.clone(),
            buy: config.buy_message.clone(),
            timeout_ms: config.toast_timeout_ms,
        },
    )));

    // One delegated listener for every data-action element
    let confetti_particles = config.confetti_particles;
    let confetti_ms = config.confetti_ms;
    let _ = window_event_listener(ev::click, move |ev| {
        let Some(target) = dom::event_element(&ev) else {
            return;
        };
        let button = dom::closest(&target, &format!("[{ACTION_ATTRIBUTE}]"));
        let Some(action) = closest_action(DomNode(target)) else {
            return;
        };

        // detail is the click count; 0 means keyboard activation with no pointer position
        let click = (ev.detail() > 0)
            .then(|| Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
        let origin = button
            .map(|el| click_origin(Rect::from_dom(&el.get_bounding_client_rect()), click))
            .or(click);
        let outcome = handler.borrow_mut().handle(action, origin);
        set_badge.set(outcome.badge);
        track_action(action);

        if action == Action::Bargain {
            tap_feedback();
        }
        if let Some(at) = outcome.burst {
            if !reduced_motion {
                effects::burst(at, confetti_particles, confetti_ms);
            }
        }
    });

    let store_id = config.store_section_id.clone();
    let _ = window_event_listener(ev::keydown, move |ev| {
        let editing = dom::event_element(&ev)
            .map(|el| dom::is_editing(&el))
            .unwrap_or(false);
        match Shortcut::from_key(&ev.key(), Modifiers::from_event(&ev), editing) {
            Some(Shortcut::DismissToasts) => {
                toaster.dismiss_all();
            }
            Some(Shortcut::JumpToStore) => {
                let jumped = dom::document()
                    .map(|doc| focus_section(&doc, &store_id, reduced_motion))
                    .unwrap_or(false);
                if jumped {
                    ev.prevent_default();
                }
            }
            None => {}
        }
    });

    view! {
        <SiteHeader/>
        <main id="app">
            <Hero/>
            <FeatureCards/>
            <StoreSection badge=badge/>
        </main>
        <SiteFooter/>
    }
}
