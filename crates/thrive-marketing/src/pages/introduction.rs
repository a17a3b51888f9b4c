//! Introduction section

use leptos::*;
use crate::components::*;
use thrive_core::Service;

#[component]
pub fn IntroductionPage(contact_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <section>
            <div class="container mx-auto px-4 py-16 md:py-24">
                <IntroHeader contact_open=contact_open/>
                <div class="mt-16 max-w-6xl mx-auto">
                    <IntroContent contact_open=contact_open/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn IntroHeader(contact_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto text-center">
            <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-6">
                "Build a Life You "
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-500 to-teal-500">
                    "Thrive In"
                </span>
            </h1>
            <p class="text-xl md:text-2xl text-gray-600 mb-8">
                "One-on-one guidance for body and mind: training plans, psychological support, "
                "coaching and manifestation practice, shaped around you."
            </p>
            <button
                class="px-8 py-4 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg transition"
                on:click=move |_| contact_open.set(true)
            >
                "Book a Consultation"
            </button>
        </div>
    }
}

#[component]
fn IntroContent(contact_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="space-y-20">
            <div id="services" class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                <ServiceCard
                    service=Service::Fitness
                    icon="💪"
                    description="Training programmes matched to your goals, schedule and starting point."
                    contact_open=contact_open
                />
                <ServiceCard
                    service=Service::Psychological
                    icon="🧠"
                    description="A steady space to work through stress, anxiety and the patterns holding you back."
                    contact_open=contact_open
                />
                <ServiceCard
                    service=Service::LifeCoaching
                    icon="🧭"
                    description="Clear goals, practical plans and accountability for the changes you want."
                    contact_open=contact_open
                />
                <ServiceCard
                    service=Service::Manifestation
                    icon="✨"
                    description="Intention-setting and visualisation practices grounded in daily habits."
                    contact_open=contact_open
                />
            </div>

            <ol id="approach" class="grid md:grid-cols-3 gap-8">
                <JourneyStep
                    step=1
                    icon="📝"
                    title="Tell us about you"
                    description="Share your details and the services you're curious about."
                />
                <JourneyStep
                    step=2
                    icon="📞"
                    title="We call you back"
                    description="A practitioner reaches out to arrange a first conversation."
                />
                <JourneyStep
                    step=3
                    icon="🌱"
                    title="Start growing"
                    description="Together we shape a plan that fits your life."
                />
            </ol>
        </div>
    }
}
