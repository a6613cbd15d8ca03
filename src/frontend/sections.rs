use yew::prelude::*;

use crate::config::SKILL_REVEAL_STEP_MS;
use crate::contact::{ContactField, ContactForm};
use crate::profile::{Profile, Work};
use crate::scroll::Section;
use crate::theme::ThemePreference;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub name: AttrValue,
    pub active: Section,
    pub preference: ThemePreference,
    pub on_select_theme: Callback<ThemePreference>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar" aria-label="Sections">
            <span class="brand">{props.name.clone()}</span>
            <div class="nav-links">
                { for Section::ALL.iter().map(|section| {
                    let current = *section == props.active;
                    html! {
                        <a
                            key={section.id()}
                            href={section.anchor()}
                            class={classes!("nav-link", current.then_some("is-active"))}
                            aria-current={current.then_some("true")}
                        >
                            {section.label()}
                        </a>
                    }
                }) }
                <ThemeMenu preference={props.preference} on_select={props.on_select_theme.clone()} />
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeMenuProps {
    preference: ThemePreference,
    on_select: Callback<ThemePreference>,
}

#[function_component(ThemeMenu)]
fn theme_menu(props: &ThemeMenuProps) -> Html {
    html! {
        <div class="theme-menu">
            <button class="theme-menu-trigger" type="button" aria-label="Theme settings">
                <span aria-hidden="true">{"⚙"}</span>
            </button>
            <div class="theme-menu-panel" role="group" aria-label="Theme">
                { for ThemePreference::ALL.iter().map(|preference| {
                    let preference = *preference;
                    let pressed = preference == props.preference;
                    html! {
                        <button
                            key={preference.as_str()}
                            type="button"
                            class={classes!("theme-option", pressed.then_some("is-selected"))}
                            aria-pressed={pressed.to_string()}
                            onclick={props.on_select.reform(move |_: MouseEvent| preference)}
                        >
                            <span class="theme-option-icon" aria-hidden="true">{preference.icon()}</span>
                            {preference.label()}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let profile = &props.profile;

    html! {
        <section id={Section::About.id()} class="section hero" aria-labelledby="hero-title">
            <img class="avatar" src={profile.image} alt={profile.name} width="128" height="128" />
            <h1 id="hero-title" class="hero-title">{profile.title}</h1>
            <ul class="socials">
                { for profile.socials.iter().map(|social| html! {
                    <li key={social.label}>
                        <a class="social-link" href={social.url} target="_blank" rel="noopener noreferrer">
                            {social.label}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: &'static [&'static str],
    #[prop_or_default]
    pub revealed: bool,
}

fn reveal_delay(index: usize) -> String {
    format!("--reveal-delay: {}ms;", index * SKILL_REVEAL_STEP_MS)
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section id={Section::Skills.id()} class="section section-alt" aria-labelledby="skills-heading">
            <h2 id="skills-heading" class="section-title">{Section::Skills.label()}</h2>
            <ul class={classes!("skills-grid", props.revealed.then_some("is-revealed"))}>
                { for props.skills.iter().enumerate().map(|(index, skill)| html! {
                    <li key={*skill} class="card skill-card reveal" style={reveal_delay(index)}>
                        {*skill}
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorksProps {
    pub works: &'static [Work],
    pub on_select: Callback<usize>,
}

#[function_component(Works)]
pub fn works(props: &WorksProps) -> Html {
    html! {
        <section id={Section::Works.id()} class="section" aria-labelledby="works-heading">
            <h2 id="works-heading" class="section-title">{Section::Works.label()}</h2>
            <div class="works-grid">
                { for props.works.iter().enumerate().map(|(index, work)| html! {
                    <button
                        key={work.title}
                        type="button"
                        class="card work-card"
                        aria-haspopup="dialog"
                        onclick={props.on_select.reform(move |_: MouseEvent| index)}
                    >
                        <h3 class="work-title">{work.title}</h3>
                        <p class="work-description">{work.description}</p>
                        <span class="work-view">{"View"}</span>
                    </button>
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkModalProps {
    #[prop_or_default]
    pub work: Option<&'static Work>,
    #[prop_or_default]
    pub closing: bool,
    pub on_close: Callback<()>,
    pub on_exit: Callback<()>,
}

const MODAL_EXIT_ANIMATION: &str = "fade-out";

// Backdrop clicks close the dialog; clicks inside it do not.
#[function_component(WorkModal)]
pub fn work_modal(props: &WorkModalProps) -> Html {
    let Some(work) = props.work else {
        return html! {};
    };

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_animation_end = {
        let closing = props.closing;
        let on_exit = props.on_exit.clone();
        Callback::from(move |event: AnimationEvent| {
            if closing && event.animation_name() == MODAL_EXIT_ANIMATION {
                on_exit.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!("modal-backdrop", props.closing.then_some("is-closing"))}
            aria-hidden={props.closing.then_some("true")}
            onclick={on_backdrop}
            onanimationend={on_animation_end}
        >
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                onclick={keep_open}
            >
                <h3 id="modal-title" class="modal-title">{work.title}</h3>
                <p class="modal-description">{work.description}</p>
                <a class="modal-link" href={work.link} target="_blank" rel="noopener noreferrer">
                    {"Visit Project"}
                </a>
                <button type="button" class="modal-close" onclick={on_close}>{"Close"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub form: ContactForm,
}

fn contact_field(field: &ContactField) -> Html {
    let id = format!("contact-{}", field.name);
    let control = match field.kind.input_type() {
        Some(input_type) => html! {
            <input
                id={id.clone()}
                class="contact-input"
                type={input_type}
                name={field.name}
                placeholder={field.placeholder}
                required={field.required}
            />
        },
        None => html! {
            <textarea
                id={id.clone()}
                class="contact-input"
                name={field.name}
                placeholder={field.placeholder}
                rows="5"
                required={field.required}
            />
        },
    };

    html! {
        <div key={field.name} class="contact-field">
            <label class="sr-only" for={id}>{field.placeholder}</label>
            {control}
        </div>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = props.form;

    html! {
        <section id={Section::Contact.id()} class="section section-alt" aria-labelledby="contact-heading">
            <h2 id="contact-heading" class="section-title">{Section::Contact.label()}</h2>
            <form class="contact-form" action={form.action} method={form.method}>
                { for form.fields.iter().map(contact_field) }
                <button type="submit" class="button contact-submit">{"Send"}</button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub name: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <p class="muted">{format!("© {}", props.name)}</p>
        </footer>
    }
}
