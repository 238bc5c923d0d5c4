//! Pricing Calculator
//!
//! "Build your plan": pick hours with the slider or +/- buttons, pick a
//! payment option, and the summary recomputes on every change.

use academy_core::{
    HourSelection, InstallmentCount, PricingEngine, format_per_month, format_usd,
};
use leptos::prelude::*;

use crate::components::{LineItemRow, Section, SectionHeading};

#[component]
pub fn PricingSection() -> impl IntoView {
    let engine = PricingEngine::standard();

    let (hours, set_hours) = signal(HourSelection::default());
    let (installments, set_installments) = signal(InstallmentCount::default());

    let quote = Memo::new(move |_| engine.quote(hours.get()));

    let on_slide = move |ev: leptos::ev::Event| {
        if let Ok(selection) = event_target_value(&ev).parse::<HourSelection>() {
            set_hours.set(selection);
        }
    };

    let payment_options = move || {
        engine
            .options(&quote.get())
            .into_iter()
            .map(|plan| {
                let count = plan.count;
                let right = if count.is_pay_in_full() {
                    format_usd(plan.per_payment)
                } else {
                    format_per_month(plan.per_payment)
                };
                let class = move || {
                    if installments.get() == count {
                        "radio-row selected"
                    } else {
                        "radio-row"
                    }
                };

                view! {
                    <button class=class on:click=move |_| set_installments.set(count)>
                        <div>
                            <div class="radio-label">{count.label()}</div>
                            <div class="radio-caption">{count.caption()}</div>
                        </div>
                        <div class="radio-right">{right}</div>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Section id="pricing" variant="bg-white">
            <SectionHeading
                title="Build your plan"
                subtitle="Slide to choose hours. Pricing adjusts automatically. Pay in full or split into installments."
            />

            <div class="pricing-grid">
                <div class="card calculator">
                    <div class="hours-header">
                        <p class="hours-title">"$ Select Your Tutoring Hours"</p>
                        <div class="stepper">
                            <button
                                aria-label="decrease hours"
                                on:click=move |_| set_hours.update(|h| *h = h.decrement())
                            >
                                "−"
                            </button>
                            <div class="stepper-value">{move || hours.get().to_string()}</div>
                            <button
                                aria-label="increase hours"
                                on:click=move |_| set_hours.update(|h| *h = h.increment())
                            >
                                "+"
                            </button>
                        </div>
                    </div>

                    <input
                        type="range"
                        min=HourSelection::MIN.to_string()
                        max=HourSelection::MAX.to_string()
                        step=HourSelection::STEP.to_string()
                        prop:value=move || hours.get().hours().to_string()
                        on:input=on_slide
                    />

                    <div class="figures">
                        <div>
                            <div class="figure-label">"Hours"</div>
                            <div class="figure-value">{move || quote.get().hours.to_string()}</div>
                        </div>
                        <div>
                            <div class="figure-label">"Rate/hr"</div>
                            <div class="figure-value">{move || format_usd(quote.get().rate)}</div>
                        </div>
                        <div>
                            <div class="figure-label">"Total"</div>
                            <div class="figure-value">{move || format_usd(quote.get().total)}</div>
                        </div>
                    </div>

                    <div class="notice">"⚠ Limited-time: secure these rates while seats last."</div>
                </div>

                <div class="card program">
                    <h3>"Your Program"</h3>
                    <div class="line-items">
                        {move || {
                            quote
                                .get()
                                .line_items()
                                .into_iter()
                                .map(|item| view! { <LineItemRow item=item /> })
                                .collect_view()
                        }}
                    </div>

                    <h4>"Payment Options"</h4>
                    <div class="payment-options">{payment_options}</div>

                    <a href="#contact" class="btn btn-primary btn-block">
                        {move || format!("Start now — lock in {} hours", hours.get())}
                    </a>
                    <p class="fine-print">"No interest. No hidden fees. You can edit your plan anytime."</p>
                </div>
            </div>
        </Section>
    }
}
