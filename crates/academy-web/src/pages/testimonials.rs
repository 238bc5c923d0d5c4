//! Testimonials Carousel

use academy_core::Carousel;
use leptos::prelude::*;

use crate::components::{Section, SectionHeading, TestimonialCard};

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 9] = [
    Testimonial {
        quote: "Went from a 503 diagnostic to a 515 in 8 weeks. Timing strategies changed everything for CARS.",
        name: "Riya P.",
        role: "Accepted to UA COM",
    },
    Testimonial {
        quote: "My B/B plateau broke after two sessions with a 132 scorer who showed me how to read passages like a scientist.",
        name: "Jason M.",
        role: "520 official",
    },
    Testimonial {
        quote: "I finally had a plan I could follow with school. The weekly check-ins kept me consistent.",
        name: "Amrita K.",
        role: "+12 point increase",
    },
    Testimonial {
        quote: "+14 points in 6 weeks. Custom passages and error logs made the difference.",
        name: "Lauren S.",
        role: "NYU applicant",
    },
    Testimonial {
        quote: "C/P clicked once we switched to a data-first approach. I hit 131 on my next FL.",
        name: "Marcus D.",
        role: "131 C/P",
    },
    Testimonial {
        quote: "I always felt stuck at 508. Pacing + reasoning drills took me to a 519 official.",
        name: "Sofia H.",
        role: "519 official",
    },
    Testimonial {
        quote: "Tutor matched me by personality and schedule. Studying finally felt sustainable and my stress dropped.",
        name: "Neha L.",
        role: "+11 point jump",
    },
    Testimonial {
        quote: "The passage-mapping method for B/B was a game changer. I stopped rereading and started answering with confidence.",
        name: "Caleb W.",
        role: "131 B/B",
    },
    Testimonial {
        quote: "Their weekly accountability texts kept me honest. Hit my 515 goal a month early.",
        name: "Janelle T.",
        role: "515 official",
    },
];

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(TESTIMONIALS.len()));
    let slides = carousel.get_untracked().slides();

    let track_style = move || {
        format!(
            "width: {}%; transform: translateX(-{}%);",
            100 * slides,
            carousel.get().offset_percent()
        )
    };
    let slide_width = format!("width: calc(100% / {});", slides.max(1));

    let slide_views = (0..slides)
        .map(|slide| {
            let cards = Carousel::cards_on(slide, TESTIMONIALS.len())
                .map(|i| {
                    let t = &TESTIMONIALS[i];
                    view! { <TestimonialCard quote=t.quote name=t.name role=t.role /> }
                })
                .collect_view();
            view! { <div class="slide" style=slide_width.clone()>{cards}</div> }
        })
        .collect_view();

    let dots = (0..slides)
        .map(|i| {
            let target = isize::try_from(i).unwrap_or(0);
            let class = move || {
                if carousel.get().index() == i { "dot active" } else { "dot" }
            };
            view! {
                <button
                    class=class
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |_| set_carousel.update(|c| *c = c.slide_to(target))
                ></button>
            }
        })
        .collect_view();

    view! {
        <Section id="testimonials" variant="bg-light">
            <SectionHeading title="Student wins" subtitle="Real outcomes from tailored coaching." />

            <div class="carousel">
                <div class="carousel-viewport">
                    <div class="carousel-track" style=track_style>{slide_views}</div>
                </div>

                <div class="carousel-controls">
                    <div class="carousel-arrows">
                        <button aria-label="Previous" on:click=move |_| set_carousel.update(|c| *c = c.prev())>
                            "‹"
                        </button>
                        <button aria-label="Next" on:click=move |_| set_carousel.update(|c| *c = c.next())>
                            "›"
                        </button>
                    </div>
                    <div class="carousel-dots">{dots}</div>
                </div>
            </div>
        </Section>
    }
}
