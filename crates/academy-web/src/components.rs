//! UI Components

use academy_core::{LineItem, LineKind};
use leptos::prelude::*;

/// Page section with an anchor id for the nav links
#[component]
pub fn Section(
    id: &'static str,
    #[prop(optional)] variant: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=format!("section {variant}")>
            <div class="container">{children()}</div>
        </section>
    }
}

/// Centered heading block at the top of a section
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

#[component]
pub fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card feature">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{children()}</p>
        </div>
    }
}

#[component]
pub fn HowStep(step: u8, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card how-step">
            <div class="step-badge">{format!("STEP {step}")}</div>
            <h4>{title}</h4>
            <p>{children()}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(quote: &'static str, name: &'static str, role: &'static str) -> impl IntoView {
    view! {
        <div class="card testimonial">
            <p>{format!("“{quote}”")}</p>
            <div class="testimonial-author">
                <div class="avatar"></div>
                <div>
                    <div class="name">{name}</div>
                    <div class="role">{role}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FaqItem(q: &'static str, a: &'static str) -> impl IntoView {
    view! {
        <details class="card faq">
            <summary>
                <h4>{q}</h4>
                <span class="faq-toggle">"+"</span>
            </summary>
            <p>{a}</p>
        </details>
    }
}

/// One row of the program summary
#[component]
pub fn LineItemRow(item: LineItem) -> impl IntoView {
    let class = match item.kind {
        LineKind::Charge => "line-item",
        LineKind::Discount => "line-item accent",
        LineKind::Total => "line-item bold",
    };
    let amount = item.display_amount();

    view! {
        <div class=class>
            <span class="line-label">{item.label}</span>
            <span class="line-amount">{amount}</span>
        </div>
    }
}
