//! Card components for the introduction section

use leptos::*;
use thrive_core::Service;

/// One offered service, with a shortcut into the contact dialog
#[component]
pub fn ServiceCard(
    service: Service,
    icon: &'static str,
    description: &'static str,
    contact_open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <article class="flex flex-col h-full bg-white rounded-xl border border-emerald-100 shadow-sm hover:shadow-md transition p-6">
            <div class="flex items-center gap-3 mb-4">
                <span class="w-11 h-11 rounded-full bg-emerald-50 flex items-center justify-center text-2xl">{icon}</span>
                <h3 class="text-lg font-semibold text-gray-900">{service.label()}</h3>
            </div>
            <p class="flex-1 text-gray-600 text-sm leading-relaxed">{description}</p>
            <button
                class="mt-6 self-start text-sm font-medium text-emerald-700 hover:text-emerald-900"
                on:click=move |_| contact_open.set(true)
            >
                {format!("Ask about {} →", service.label().to_lowercase())}
            </button>
        </article>
    }
}

/// Numbered stage of the first-contact journey
#[component]
pub fn JourneyStep(
    step: u8,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <li class="relative pl-14">
            <span class="absolute left-0 top-0 w-10 h-10 rounded-full bg-teal-600 text-white flex items-center justify-center text-lg">
                {icon}
            </span>
            <p class="text-xs font-semibold uppercase tracking-wide text-teal-700">{format!("Step {}", step)}</p>
            <h3 class="font-semibold text-gray-900">{title}</h3>
            <p class="text-gray-600 text-sm mt-1">{description}</p>
        </li>
    }
}
