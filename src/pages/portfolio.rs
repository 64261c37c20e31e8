//! Portfolio grid and the per-project detail views. Project records are a
//! static table; the detail component looks its record up by view, so a
//! new case study is one table row plus one view id.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::views::View;

struct ProjectRecord {
    view: View,
    name: &'static str,
    category: &'static str,
    blurb: &'static str,
    story: &'static str,
    delivered: &'static [&'static str],
}

static PROJECTS: [ProjectRecord; 3] = [
    ProjectRecord {
        view: View::ProjectTrattoria,
        name: "Trattoria Bella Vista",
        category: "Restaurant · Website + Automation",
        blurb: "A family trattoria that was losing dinner bookings to a phone \
                nobody could answer during service.",
        story: "Bella Vista's site now takes reservations directly, and a chat \
                assistant answers the questions that used to interrupt the \
                kitchen: opening hours, allergens, group bookings. The owners \
                update the menu themselves from a simple editor.",
        delivered: &[
            "Website with online reservations",
            "Menu the owners edit themselves",
            "Chat assistant for common questions",
        ],
    },
    ProjectRecord {
        view: View::ProjectAtelier,
        name: "Atelier Moda",
        category: "Fashion Boutique · Website",
        blurb: "An independent boutique whose collections deserved better than \
                a static gallery from 2014.",
        story: "The new site puts each collection front and center with a \
                lookbook layout, and appointment requests for fittings go \
                straight into the atelier's calendar instead of a shared inbox.",
        delivered: &[
            "Lookbook-style collection pages",
            "Fitting appointment requests",
            "Instagram feed integration",
        ],
    },
    ProjectRecord {
        view: View::ProjectOfficina,
        name: "Officina Motors",
        category: "Auto Repair · Automation",
        blurb: "A busy garage drowning in \"is my car ready?\" calls.",
        story: "Customers now get automatic status updates as their repair \
                moves through the shop, and the chat assistant handles quote \
                requests overnight. The front desk got its phone line back.",
        delivered: &[
            "Automated repair status updates",
            "Overnight quote request handling",
            "Service booking form",
        ],
    },
];

fn project_for(view: View) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|record| record.view == view)
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <section class="portfolio-section">
            <h2 class="section-title animate-on-scroll">{"Our Work"}</h2>

            <div class="portfolio-grid">
                { for PROJECTS.iter().map(|record| {
                    let on_navigate = props.on_navigate.clone();
                    let view = record.view;
                    let open = Callback::from(move |_: MouseEvent| on_navigate.emit(view));
                    html! {
                        <div class="portfolio-card animate-on-scroll" onclick={open}>
                            <div class="portfolio-thumb">
                                { record.name.chars().next().unwrap_or('W').to_string() }
                            </div>
                            <h3>{ record.name }</h3>
                            <p class="portfolio-category">{ record.category }</p>
                            <p>{ record.blurb }</p>
                            <span class="portfolio-more">{"View case study →"}</span>
                        </div>
                    }
                }) }
            </div>

            <style>
                {r#"
.portfolio-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 6rem 1.5rem 5rem;
}
.portfolio-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}
.portfolio-card {
    padding: 2rem;
    border: 1px solid #eee;
    cursor: pointer;
}
.portfolio-thumb {
    width: 64px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #1a1a1a;
    color: white;
    font-size: 1.6rem;
    margin-bottom: 1.2rem;
}
.portfolio-category {
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #888;
}
.portfolio-more {
    font-size: 0.85rem;
    letter-spacing: 0.05em;
}
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub view: View,
    pub on_navigate: Callback<View>,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let Some(record) = project_for(props.view) else {
        return html! {};
    };

    let back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(View::Portfolio);
        })
    };
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Contact))
    };

    html! {
        <section class="project-section">
            <a href="#portfolio" class="project-back" onclick={back}>
                {"← Back to portfolio"}
            </a>

            <h2 class="project-title animate-on-scroll">{ record.name }</h2>
            <p class="portfolio-category">{ record.category }</p>

            <p class="project-story animate-on-scroll">{ record.story }</p>

            <h3 class="animate-on-scroll">{"What we delivered"}</h3>
            <ul class="project-delivered animate-on-scroll">
                { for record.delivered.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>

            <button class="cta-button animate-on-scroll" onclick={to_contact}>
                {"Start a project like this"}
            </button>

            <style>
                {r#"
.project-section {
    max-width: 760px;
    margin: 0 auto;
    padding: 6rem 1.5rem 5rem;
}
.project-back {
    display: inline-block;
    margin-bottom: 2rem;
    color: #1a1a1a;
    text-decoration: none;
    font-size: 0.9rem;
}
.project-title {
    letter-spacing: 0.1em;
    margin-bottom: 0.3rem;
}
.project-story {
    margin: 2rem 0;
    line-height: 1.7;
}
.project-delivered {
    padding-left: 1.2rem;
    color: #555;
    margin-bottom: 2.5rem;
}
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_view_has_a_record() {
        for view in [
            View::ProjectTrattoria,
            View::ProjectAtelier,
            View::ProjectOfficina,
        ] {
            assert!(project_for(view).is_some(), "missing record for {view:?}");
        }
    }

    #[test]
    fn non_project_views_have_no_record() {
        for view in [View::Landing, View::Services, View::Portfolio, View::Contact] {
            assert!(project_for(view).is_none());
        }
    }

    #[test]
    fn records_and_project_views_are_one_to_one() {
        assert_eq!(PROJECTS.len(), 3);
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in PROJECTS.iter().skip(i + 1) {
                assert_ne!(a.view, b.view);
            }
        }
    }
}
