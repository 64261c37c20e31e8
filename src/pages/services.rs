//! Services view: the three offerings with their pricing framing. Pure
//! content; the only behavior is navigation into the contact form.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::views::View;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Contact))
    };

    html! {
        <section class="services-section">
            <h2 class="section-title animate-on-scroll">{"Services"}</h2>

            <div class="service-list">
                <div class="service-card animate-on-scroll">
                    <h3>{"Website Design"}</h3>
                    <p class="service-price">{"One-time project, quoted per site"}</p>
                    <p>
                        {"A complete site built around your business: design, copy \
                          structure, mobile layout, and launch. You own everything \
                          when it ships."}
                    </p>
                    <ul>
                        <li>{"Custom design, no templates"}</li>
                        <li>{"Responsive on every screen size"}</li>
                        <li>{"Contact forms and booking flows"}</li>
                    </ul>
                </div>

                <div class="service-card animate-on-scroll">
                    <h3>{"AI Automation & Chatbots"}</h3>
                    <p class="service-price">{"Monthly service, from €19.99/month"}</p>
                    <p>
                        {"An assistant trained on your business that answers customer \
                          questions day and night, plus automations for the busywork \
                          behind the scenes."}
                    </p>
                    <ul>
                        <li>{"Chat assistant on your site"}</li>
                        <li>{"Email and booking automations"}</li>
                        <li>{"Monthly tuning included"}</li>
                    </ul>
                </div>

                <div class="service-card animate-on-scroll">
                    <h3>{"Consultation"}</h3>
                    <p class="service-price">{"Hourly, from €50/hour"}</p>
                    <p>
                        {"A working session on your current setup: what to automate, \
                          what to rebuild, and what to leave alone. Concrete next \
                          steps, not a sales pitch."}
                    </p>
                    <ul>
                        <li>{"Site and workflow review"}</li>
                        <li>{"Prioritized recommendations"}</li>
                        <li>{"Project-based pricing available"}</li>
                    </ul>
                </div>
            </div>

            <div class="services-cta animate-on-scroll">
                <button class="cta-button" onclick={to_contact}>
                    {"Request a Quote"}
                </button>
            </div>

            <style>
                {r#"
.services-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 6rem 1.5rem 5rem;
}
.service-list {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}
.service-card {
    padding: 2rem;
    border: 1px solid #eee;
}
.service-price {
    font-size: 0.85rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #888;
}
.service-card ul {
    padding-left: 1.2rem;
    color: #555;
}
.services-cta {
    text-align: center;
    margin-top: 3rem;
}
                "#}
            </style>
        </section>
    }
}
