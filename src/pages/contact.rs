//! Contact view. Delivery is delegated to the external form processor via a
//! plain form action; this component's own behavior is the budget dropdown
//! following the service dropdown, plus submit-button feedback while the
//! browser carries the submission out.

use web_sys::{Event, HtmlSelectElement, SubmitEvent};
use yew::prelude::*;

use crate::config;

/// One budget dropdown configuration: its label text and its option rows as
/// `(value, visible label)` pairs. The first row of every table is the
/// empty-value placeholder.
struct BudgetSet {
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
}

static ONE_TIME_BUDGETS: BudgetSet = BudgetSet {
    label: "Budget Range (One-time)",
    options: &[
        ("", "Select your budget range"),
        ("less-than-500", "Less than €500"),
        ("500-1000", "€500 - €1,000"),
        ("1000-3000", "€1,000 - €3,000"),
        ("3000-5000", "€3,000 - €5,000"),
        ("5000-10000", "€5,000 - €10,000"),
        ("more-than-10000", "More than €10,000"),
        ("flexible", "Flexible / Let's Discuss"),
    ],
};

static MONTHLY_BUDGETS: BudgetSet = BudgetSet {
    label: "Monthly Budget Range",
    options: &[
        ("", "Select your monthly budget"),
        ("19.99-50", "€19.99 - €50/month"),
        ("50-100", "€50 - €100/month"),
        ("100-200", "€100 - €200/month"),
        ("200-500", "€200 - €500/month"),
        ("more-than-500", "More than €500/month"),
    ],
};

static HOURLY_BUDGETS: BudgetSet = BudgetSet {
    label: "Budget Range",
    options: &[
        ("", "Select your budget range"),
        ("hourly-50-100", "€50 - €100/hour"),
        ("hourly-100-200", "€100 - €200/hour"),
        ("project-based", "Project-based pricing"),
        ("flexible", "Flexible / Let's Discuss"),
    ],
};

static UNSELECTED_BUDGETS: BudgetSet = BudgetSet {
    label: "Budget Range",
    options: &[("", "Select service type first")],
};

fn budget_set(service: &str) -> &'static BudgetSet {
    match service {
        "website" | "both" => &ONE_TIME_BUDGETS,
        "automation" => &MONTHLY_BUDGETS,
        "consultation" => &HOURLY_BUDGETS,
        _ => &UNSELECTED_BUDGETS,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let service = use_state(String::new);
    let submitting = use_state(|| false);

    let on_service_change = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };

    // Default is NOT prevented: the browser posts to the form processor and
    // navigates away. The state flip only restyles the button meanwhile.
    let onsubmit = {
        let submitting = submitting.clone();
        Callback::from(move |_: SubmitEvent| {
            submitting.set(true);
        })
    };

    let set = budget_set(&service);

    html! {
        <section class="contact-section">
            <h2 class="section-title animate-on-scroll">{"Get In Touch"}</h2>
            <p class="contact-intro animate-on-scroll">
                {"Tell us about your project and we will get back to you within \
                  one business day. Prefer a direct line? Write to "}
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                    { config::CONTACT_EMAIL }
                </a>
                {" or call "}
                <a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>
                    { config::CONTACT_PHONE }
                </a>
                {"."}
            </p>

            <form
                class="contact-form animate-on-scroll"
                id="contact-form"
                action={config::contact_form_endpoint()}
                method="post"
                {onsubmit}
            >
                <label for="name">{"Name"}</label>
                <input type="text" id="name" name="name" required=true />

                <label for="email">{"Email"}</label>
                <input type="email" id="email" name="email" required=true />

                <label for="service">{"What do you need?"}</label>
                <select id="service" name="service" required=true onchange={on_service_change}>
                    <option value="">{"Select a service"}</option>
                    <option value="website">{"Website Design"}</option>
                    <option value="automation">{"AI Automation & Chatbots"}</option>
                    <option value="consultation">{"Consultation"}</option>
                    <option value="both">{"Website + Automation"}</option>
                </select>

                <label for="budget" id="budget-label">{ set.label }</label>
                // Remounting on service change resets the selection to the
                // placeholder row, like a rebuilt option list would.
                <select id="budget" name="budget" key={(*service).clone()}>
                    { for set.options.iter().map(|(value, label)| html! {
                        <option value={*value}>{ *label }</option>
                    }) }
                </select>

                <label for="message">{"Project details"}</label>
                <textarea id="message" name="message" rows="5" required=true />

                <button
                    type="submit"
                    class="submit-button"
                    id="submit-button"
                    disabled={*submitting}
                >
                    { if *submitting { "Sending..." } else { "Send Message" } }
                </button>
            </form>

            <style>
                {r#"
.contact-section {
    max-width: 640px;
    margin: 0 auto;
    padding: 6rem 1.5rem 5rem;
}
.contact-intro {
    text-align: center;
    margin-bottom: 2.5rem;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}
.contact-form label {
    margin-top: 1rem;
    font-size: 0.85rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
.contact-form input,
.contact-form select,
.contact-form textarea {
    padding: 0.7rem;
    border: 1px solid #ddd;
    font: inherit;
}
.submit-button {
    margin-top: 1.5rem;
    padding: 0.9rem;
    border: none;
    background: #1a1a1a;
    color: white;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    cursor: pointer;
}
.submit-button:disabled {
    opacity: 0.7;
    cursor: default;
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
    fn automation_budget_has_exactly_six_options() {
        let set = budget_set("automation");
        assert_eq!(set.options.len(), 6);
        assert_eq!(set.options[0], ("", "Select your monthly budget"));
        assert_eq!(set.label, "Monthly Budget Range");
    }

    #[test]
    fn website_and_both_share_the_one_time_table() {
        assert!(std::ptr::eq(budget_set("website"), budget_set("both")));
        let set = budget_set("website");
        assert_eq!(set.options.len(), 8);
        assert_eq!(set.label, "Budget Range (One-time)");
        assert_eq!(set.options[7].0, "flexible");
    }

    #[test]
    fn consultation_budget_is_hourly_framed() {
        let set = budget_set("consultation");
        assert_eq!(set.options.len(), 5);
        assert_eq!(set.label, "Budget Range");
        assert!(set.options[1].1.ends_with("/hour"));
    }

    #[test]
    fn unknown_service_gets_the_placeholder_row() {
        for service in ["", "catering", "WEBSITE"] {
            let set = budget_set(service);
            assert_eq!(set.options.len(), 1);
            assert_eq!(set.options[0], ("", "Select service type first"));
            assert_eq!(set.label, "Budget Range");
        }
    }

    #[test]
    fn every_table_leads_with_an_empty_value() {
        for set in [
            &ONE_TIME_BUDGETS,
            &MONTHLY_BUDGETS,
            &HOURLY_BUDGETS,
            &UNSELECTED_BUDGETS,
        ] {
            assert_eq!(set.options[0].0, "");
        }
    }
}
