use crate::config::SCROLL_REFERENCE_OFFSET;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Works,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::About, Self::Skills, Self::Works, Self::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Works => "works",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Works => "Works",
            Self::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }
}

// Viewport-relative, as returned by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }

    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Returns the last section in document order whose bounds contain
/// `reference`, or `current` when none does. Sections without bounds (not in
/// the DOM) are skipped.
pub fn resolve_active_section<F>(current: Section, reference: f64, mut bounds_of: F) -> Section
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL
        .into_iter()
        .fold(current, |active, section| match bounds_of(section) {
            Some(bounds) if bounds.contains(reference) => section,
            _ => active,
        })
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    active: Section,
    reference: f64,
    revealed: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::with_reference(SCROLL_REFERENCE_OFFSET)
    }

    pub fn with_reference(reference: f64) -> Self {
        Self {
            active: Section::default(),
            reference,
            revealed: false,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Latches the first time `bounds` enters the viewport. Returns `true`
    /// only on that first sighting.
    pub fn observe_reveal(&mut self, bounds: Option<SectionBounds>, viewport_height: f64) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = bounds.is_some_and(|bounds| bounds.intersects_viewport(viewport_height));
        self.revealed
    }

    /// Returns the new active section only when it changed.
    pub fn observe<F>(&mut self, bounds_of: F) -> Option<Section>
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        let next = resolve_active_section(self.active, self.reference, bounds_of);
        if next == self.active {
            return None;
        }
        log::debug!("active section {} -> {}", self.active.id(), next.id());
        self.active = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::Subscription;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Layout = [Option<SectionBounds>; 4];

    fn layout_of(layout: &Layout) -> impl FnMut(Section) -> Option<SectionBounds> + '_ {
        move |section| {
            let index = Section::ALL
                .iter()
                .position(|candidate| *candidate == section)
                .unwrap();
            layout[index]
        }
    }

    // Stacked sections of `height`, scrolled down by `scrolled`.
    fn stacked(height: f64, scrolled: f64) -> Layout {
        let mut layout = [None; 4];
        for (index, slot) in layout.iter_mut().enumerate() {
            let top = index as f64 * height - scrolled;
            *slot = Some(SectionBounds::new(top, top + height));
        }
        layout
    }

    #[test]
    fn starts_on_about() {
        assert_eq!(ScrollTracker::new().active(), Section::About);
    }

    #[test]
    fn reference_inside_skills_selects_skills_from_any_prior() {
        let layout = stacked(800.0, 900.0);
        for prior in Section::ALL {
            let next = resolve_active_section(prior, 150.0, layout_of(&layout));
            assert_eq!(next, Section::Skills, "prior {prior:?}");
        }
    }

    #[test]
    fn edges_are_inclusive() {
        let at_top = [None, Some(SectionBounds::new(150.0, 900.0)), None, None];
        assert_eq!(
            resolve_active_section(Section::About, 150.0, layout_of(&at_top)),
            Section::Skills
        );

        let at_bottom = [None, None, Some(SectionBounds::new(-400.0, 150.0)), None];
        assert_eq!(
            resolve_active_section(Section::About, 150.0, layout_of(&at_bottom)),
            Section::Works
        );
    }

    #[test]
    fn last_matching_section_wins() {
        let overlapping = [
            Some(SectionBounds::new(0.0, 400.0)),
            Some(SectionBounds::new(100.0, 300.0)),
            Some(SectionBounds::new(140.0, 160.0)),
            Some(SectionBounds::new(500.0, 900.0)),
        ];
        assert_eq!(
            resolve_active_section(Section::About, 150.0, layout_of(&overlapping)),
            Section::Works
        );
    }

    #[test]
    fn no_match_keeps_current() {
        let below = stacked(100.0, -500.0);
        assert_eq!(
            resolve_active_section(Section::Contact, 150.0, layout_of(&below)),
            Section::Contact
        );
    }

    #[test]
    fn missing_sections_are_skipped() {
        let partial = [Some(SectionBounds::new(0.0, 800.0)), None, None, None];
        assert_eq!(
            resolve_active_section(Section::Works, 150.0, layout_of(&partial)),
            Section::About
        );
    }

    #[test]
    fn observe_reports_only_changes() {
        let mut tracker = ScrollTracker::new();
        let layout = stacked(800.0, 0.0);
        assert_eq!(tracker.observe(layout_of(&layout)), None);

        let layout = stacked(800.0, 2500.0);
        assert_eq!(tracker.observe(layout_of(&layout)), Some(Section::Contact));
        assert_eq!(tracker.active(), Section::Contact);
        assert_eq!(tracker.observe(layout_of(&layout)), None);
    }

    #[test]
    fn reveal_latches_on_first_sighting() {
        let mut tracker = ScrollTracker::new();
        let viewport = 800.0;

        assert!(!tracker.observe_reveal(Some(SectionBounds::new(900.0, 1700.0)), viewport));
        assert!(!tracker.observe_reveal(None, viewport));
        assert!(!tracker.revealed());

        assert!(tracker.observe_reveal(Some(SectionBounds::new(600.0, 1400.0)), viewport));
        assert!(tracker.revealed());

        assert!(!tracker.observe_reveal(Some(SectionBounds::new(100.0, 900.0)), viewport));
        assert!(!tracker.observe_reveal(Some(SectionBounds::new(-2000.0, -1200.0)), viewport));
        assert!(tracker.revealed());
    }

    #[test]
    fn viewport_intersection_excludes_touching_edges() {
        assert!(!SectionBounds::new(800.0, 1600.0).intersects_viewport(800.0));
        assert!(!SectionBounds::new(-800.0, 0.0).intersects_viewport(800.0));
        assert!(SectionBounds::new(-800.0, 1.0).intersects_viewport(800.0));
    }

    #[derive(Default)]
    struct FakeWindow {
        handlers: Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>,
        next_id: Cell<usize>,
    }

    impl FakeWindow {
        fn on_scroll(&self, handler: impl Fn() + 'static) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, Rc::new(handler)));

            let handlers = Rc::clone(&self.handlers);
            Subscription::new(move || handlers.borrow_mut().retain(|(other, _)| *other != id))
        }

        fn scroll(&self) {
            let handlers: Vec<_> = self
                .handlers
                .borrow()
                .iter()
                .map(|(_, handler)| Rc::clone(handler))
                .collect();
            for handler in handlers {
                handler();
            }
        }

        fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    #[test]
    fn teardown_leaves_no_listener() {
        let window = FakeWindow::default();
        let layout = Rc::new(Cell::new(stacked(800.0, 0.0)));
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));

        let subscription = {
            let layout = Rc::clone(&layout);
            let tracker = Rc::clone(&tracker);
            window.on_scroll(move || {
                let current = layout.get();
                tracker.borrow_mut().observe(layout_of(&current));
            })
        };
        assert_eq!(window.listener_count(), 1);

        layout.set(stacked(800.0, 900.0));
        window.scroll();
        assert_eq!(tracker.borrow().active(), Section::Skills);

        subscription.dispose();
        assert_eq!(window.listener_count(), 0);

        layout.set(stacked(800.0, 2500.0));
        window.scroll();
        assert_eq!(tracker.borrow().active(), Section::Skills);
    }

    #[test]
    fn remounting_keeps_a_single_listener() {
        let window = FakeWindow::default();
        for _ in 0..3 {
            let subscription = window.on_scroll(|| {});
            assert_eq!(window.listener_count(), 1);
            drop(subscription);
        }
        assert_eq!(window.listener_count(), 0);
    }
}
