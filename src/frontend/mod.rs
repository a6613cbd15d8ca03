mod dom;
mod sections;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, Event};
use yew::prelude::*;

use crate::config;
use crate::contact::contact_form;
use crate::profile::PROFILE;
use crate::scroll::{ScrollTracker, Section};
use crate::state::{AppAction, AppState};
use crate::subscription::Subscription;
use crate::theme::{PreferenceStore, ThemeController, ThemePreference};
use dom::DocumentSurface;
use sections::{Contact, Footer, Hero, Navbar, Skills, WorkModal, Works};

type Controller = ThemeController<Box<dyn PreferenceStore>, DocumentSurface>;

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let next = self.transition(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let controller = use_memo((), |_| {
        Controller::new(dom::preference_store(), DocumentSurface)
    });
    let state = {
        let controller = Rc::clone(&controller);
        use_reducer(move || AppState::new(controller.load_preference(), PROFILE.works))
    };

    {
        let controller = Rc::clone(&controller);
        let preference = state.preference;
        use_effect_with((), move |_| {
            controller.refresh(preference);
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let tracker = RefCell::new(ScrollTracker::new());
            let sync = move || {
                let mut tracker = tracker.borrow_mut();
                if let Some(section) = tracker.observe(dom::section_bounds) {
                    dispatcher.dispatch(AppAction::ScrollTo(section));
                }
                let skills = dom::section_bounds(Section::Skills);
                if tracker.observe_reveal(skills, dom::viewport_height()) {
                    dispatcher.dispatch(AppAction::RevealSkills);
                }
            };
            sync();

            let subscription = window().map(|w| dom::listen(&w, "scroll", move |_| sync()));
            move || drop(subscription)
        });
    }

    // Follow OS color-scheme changes while the preference is "system".
    {
        let controller = Rc::clone(&controller);
        use_effect_with(state.preference, move |preference| {
            let preference = *preference;
            let subscription = preference
                .follows_system()
                .then(dom::color_scheme_query)
                .flatten()
                .map(|query| {
                    dom::listen(&query, "change", move |_| controller.refresh(preference))
                });
            move || drop(subscription)
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.modal.is_open(), move |open| {
            let subscription: Option<Subscription> = if *open {
                window().map(|w| {
                    dom::listen(&w, "keydown", move |event: Event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|key| key.key() == "Escape");
                        if is_escape {
                            close_modal(&dispatcher);
                        }
                    })
                })
            } else {
                None
            };
            move || drop(subscription)
        });
    }

    let on_select_theme = {
        let controller = Rc::clone(&controller);
        let dispatcher = state.dispatcher();
        Callback::from(move |preference: ThemePreference| {
            dispatcher.dispatch(AppAction::SetPreference(preference));
            let controller = Rc::clone(&controller);
            dom::with_view_transition(move || controller.set_preference(preference));
        })
    };

    let on_select_work = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(AppAction::SelectWork(index)))
    };

    let on_close_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| close_modal(&dispatcher))
    };

    let on_modal_exit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(AppAction::ModalExitFinished))
    };

    html! {
        <>
            <a class="skip-link" href={Section::About.anchor()}>{"Skip to main content"}</a>
            <Navbar
                name={PROFILE.name}
                active={state.active_section}
                preference={state.preference}
                on_select_theme={on_select_theme}
            />
            <main class="page">
                <Hero profile={PROFILE} />
                <Skills skills={PROFILE.skills} revealed={state.skills_revealed} />
                <Works works={state.works()} on_select={on_select_work} />
                <Contact form={contact_form()} />
            </main>
            <WorkModal
                work={state.displayed_work()}
                closing={state.presence.is_leaving()}
                on_close={on_close_modal}
                on_exit={on_modal_exit}
            />
            <Footer name={PROFILE.name} />
        </>
    }
}

// Without motion no `animationend` fires, so the exit finishes immediately.
fn close_modal(dispatcher: &UseReducerDispatcher<AppState>) {
    dispatcher.dispatch(AppAction::CloseModal);
    if dom::prefers_reduced_motion() {
        dispatcher.dispatch(AppAction::ModalExitFinished);
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    if config::contact_endpoint_is_placeholder() {
        log::warn!(
            "contact form endpoint is not configured; set PORTFOLIO_FORM_ENDPOINT at build time"
        );
    }
    log::info!("mounting portfolio for {}", PROFILE.name);

    yew::Renderer::<App>::with_root(dom::mount_point().expect("missing #app mount point"))
        .render();
}
