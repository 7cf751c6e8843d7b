//! The two call-to-action buttons and the counters behind them.

use crate::geometry::Point;
use crate::storage::{parse_count, KeyValueStore, BARGAIN_CLICKS_KEY, LAST_ACTION_KEY};
use crate::toast::{ToastVariant, Toaster};

pub const ACTION_ATTRIBUTE: &str = "data-action";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Bargain,
    Buy,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bargain" => Some(Action::Bargain),
            "buy" => Some(Action::Buy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Bargain => "bargain",
            Action::Buy => "buy",
        }
    }

    /// Name reported to analytics.
    pub fn event_name(self) -> &'static str {
        match self {
            Action::Bargain => "bargain-click",
            Action::Buy => "buy-click",
        }
    }
}

/// A node of the clicked tree, seen only through its attributes and parent.
pub trait ActionTarget: Sized {
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent(&self) -> Option<Self>;
}

/// Walk up from the event target to the nearest element carrying
/// `data-action`. An unrecognised value stops the search.
pub fn closest_action<T: ActionTarget>(target: T) -> Option<Action> {
    let mut node = Some(target);
    while let Some(current) = node {
        if let Some(value) = current.attribute(ACTION_ATTRIBUTE) {
            return Action::parse(value.trim());
        }
        node = current.parent();
    }
    None
}

/// Persisted counters.
pub struct ActionState<S> {
    store: S,
    bargain_clicks: u64,
}

impl<S: KeyValueStore> ActionState<S> {
    pub fn load(store: S) -> Self {
        let bargain_clicks = parse_count(store.get(BARGAIN_CLICKS_KEY).as_deref());
        Self {
            store,
            bargain_clicks,
        }
    }

    pub fn bargain_clicks(&self) -> u64 {
        self.bargain_clicks
    }

    pub fn badge_text(&self) -> String {
        format!("{} bargained", self.bargain_clicks)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Count the action and persist it. Storage failures are logged; the
    /// in-memory count still moves.
    pub fn record(&mut self, action: Action) {
        if action == Action::Bargain {
            self.bargain_clicks = self.bargain_clicks.saturating_add(1);
            if let Err(e) = self
                .store
                .set(BARGAIN_CLICKS_KEY, &self.bargain_clicks.to_string())
            {
                log::warn!("Bargain count not saved: {e}");
            }
        }
        if let Err(e) = self.store.set(LAST_ACTION_KEY, action.as_str()) {
            log::warn!("Last action not saved: {e}");
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub action: Action,
    pub badge: String,
    /// Where to launch confetti, if anywhere
    pub burst: Option<Point>,
}

#[derive(Debug, Clone)]
pub struct ActionMessages {
    pub bargain: String,
    pub buy: String,
    pub timeout_ms: i32,
}

pub struct ActionHandler<S> {
    state: ActionState<S>,
    toaster: Toaster,
    messages: ActionMessages,
}

impl<S: KeyValueStore> ActionHandler<S> {
    pub fn new(state: ActionState<S>, toaster: Toaster, messages: ActionMessages) -> Self {
        Self {
            state,
            toaster,
            messages,
        }
    }

    pub fn state(&self) -> &ActionState<S> {
        &self.state
    }

    pub fn handle(&mut self, action: Action, origin: Option<Point>) -> ActionOutcome {
        self.state.record(action);
        log::debug!(
            "{} clicked, {} bargains so far",
            action.as_str(),
            self.state.bargain_clicks()
        );

        let (message, variant, burst) = match action {
            Action::Bargain => (&self.messages.bargain, ToastVariant::Brand, origin),
            Action::Buy => (&self.messages.buy, ToastVariant::Ghost, None),
        };
        self.toaster
            .show_for(message.clone(), variant, self.messages.timeout_ms);

        ActionOutcome {
            action,
            badge: self.state.badge_text(),
            burst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::timer::ManualScheduler;
    use crate::toast::DEFAULT_EXIT_MS;
    use std::rc::Rc;

    /// Minimal element tree: attributes plus a parent link.
    #[derive(Clone)]
    struct FakeNode {
        attrs: Vec<(&'static str, &'static str)>,
        parent: Option<Rc<FakeNode>>,
    }

    impl FakeNode {
        fn root(attrs: Vec<(&'static str, &'static str)>) -> Rc<Self> {
            Rc::new(Self { attrs, parent: None })
        }

        fn child(parent: &Rc<Self>, attrs: Vec<(&'static str, &'static str)>) -> Rc<Self> {
            Rc::new(Self {
                attrs,
                parent: Some(parent.clone()),
            })
        }
    }

    impl ActionTarget for Rc<FakeNode> {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }

        fn parent(&self) -> Option<Self> {
            self.parent.clone()
        }
    }

    fn make_handler(store: MemoryStore) -> (Rc<ManualScheduler>, Toaster, ActionHandler<MemoryStore>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let toaster = Toaster::new(scheduler.clone(), DEFAULT_EXIT_MS);
        let messages = ActionMessages {
            bargain: "Offer sent".to_string(),
            buy: "Nice pick".to_string(),
            timeout_ms: 2800,
        };
        let handler = ActionHandler::new(ActionState::load(store), toaster.clone(), messages);
        (scheduler, toaster, handler)
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(Action::parse("bargain"), Some(Action::Bargain));
        assert_eq!(Action::parse("buy"), Some(Action::Buy));
        assert_eq!(Action::parse("Buy"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn test_closest_action_on_target_itself() {
        let button = FakeNode::root(vec![("data-action", "buy")]);
        assert_eq!(closest_action(button), Some(Action::Buy));
    }

    #[test]
    fn test_closest_action_from_nested_child() {
        let section = FakeNode::root(vec![("id", "store")]);
        let button = FakeNode::child(&section, vec![("data-action", "bargain"), ("class", "btn")]);
        let icon = FakeNode::child(&button, vec![("class", "icon")]);
        assert_eq!(closest_action(icon), Some(Action::Bargain));
    }

    #[test]
    fn test_closest_action_none_without_tagged_ancestor() {
        let section = FakeNode::root(vec![("id", "store")]);
        let text = FakeNode::child(&section, vec![]);
        assert_eq!(closest_action(text), None);
    }

    #[test]
    fn test_closest_action_unknown_value_is_ignored() {
        let outer = FakeNode::root(vec![("data-action", "buy")]);
        let inner = FakeNode::child(&outer, vec![("data-action", "wishlist")]);
        assert_eq!(closest_action(inner), None);
    }

    #[test]
    fn test_fresh_store_badge_reads_zero() {
        let state = ActionState::load(MemoryStore::new());
        assert_eq!(state.bargain_clicks(), 0);
        assert_eq!(state.badge_text(), "0 bargained");
    }

    #[test]
    fn test_corrupt_count_reads_zero() {
        let state = ActionState::load(MemoryStore::with_entries([(BARGAIN_CLICKS_KEY, "lots")]));
        assert_eq!(state.badge_text(), "0 bargained");
    }

    #[test]
    fn test_stored_five_becomes_six() {
        let (_, _, mut handler) = make_handler(MemoryStore::with_entries([(BARGAIN_CLICKS_KEY, "5")]));
        assert_eq!(handler.state().badge_text(), "5 bargained");

        let outcome = handler.handle(Action::Bargain, None);
        assert_eq!(outcome.badge, "6 bargained");
        assert_eq!(
            handler.state().store().get(BARGAIN_CLICKS_KEY).as_deref(),
            Some("6")
        );
    }

    #[test]
    fn test_bargain_increments_from_any_prior_count() {
        for prior in [0u64, 1, 41, 999_999] {
            let stored = prior.to_string();
            let (_, _, mut handler) =
                make_handler(MemoryStore::with_entries([(BARGAIN_CLICKS_KEY, stored.as_str())]));
            let outcome = handler.handle(Action::Bargain, None);

            let expected = prior + 1;
            assert_eq!(outcome.badge, format!("{expected} bargained"));
            assert_eq!(
                handler.state().store().get(BARGAIN_CLICKS_KEY),
                Some(expected.to_string()),
                "prior count {prior}"
            );
        }
    }

    #[test]
    fn test_count_saturates() {
        let max = u64::MAX.to_string();
        let mut state = ActionState::load(MemoryStore::with_entries([(BARGAIN_CLICKS_KEY, max.as_str())]));
        state.record(Action::Bargain);
        assert_eq!(state.bargain_clicks(), u64::MAX);
    }

    #[test]
    fn test_last_action_follows_clicks() {
        let (_, _, mut handler) = make_handler(MemoryStore::new());

        handler.handle(Action::Bargain, None);
        assert_eq!(
            handler.state().store().get(LAST_ACTION_KEY).as_deref(),
            Some("bargain")
        );

        handler.handle(Action::Buy, None);
        assert_eq!(
            handler.state().store().get(LAST_ACTION_KEY).as_deref(),
            Some("buy")
        );
    }

    #[test]
    fn test_buy_leaves_count_alone() {
        let (_, _, mut handler) = make_handler(MemoryStore::with_entries([(BARGAIN_CLICKS_KEY, "3")]));
        let outcome = handler.handle(Action::Buy, Some(Point::new(10.0, 10.0)));
        assert_eq!(outcome.badge, "3 bargained");
        assert_eq!(outcome.burst, None);
        assert_eq!(
            handler.state().store().get(BARGAIN_CLICKS_KEY).as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_actions_show_matching_toasts() {
        let (scheduler, toaster, mut handler) = make_handler(MemoryStore::new());

        let outcome = handler.handle(Action::Bargain, Some(Point::new(40.0, 80.0)));
        assert_eq!(outcome.burst, Some(Point::new(40.0, 80.0)));
        handler.handle(Action::Buy, None);

        let shown = toaster.visible();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].message(), "Offer sent");
        assert_eq!(shown[0].variant(), ToastVariant::Brand);
        assert_eq!(shown[1].message(), "Nice pick");
        assert_eq!(shown[1].variant(), ToastVariant::Ghost);

        scheduler.advance(2800);
        assert!(toaster.visible().is_empty());
    }
}
