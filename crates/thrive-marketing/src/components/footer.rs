//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400 py-12">
            <div class="container mx-auto px-4 text-center space-y-2">
                <p class="text-white font-semibold">"Thrive"</p>
                <p class="text-sm">"Fitness, psychological support, life coaching and manifestation guidance."</p>
            </div>
        </footer>
    }
}
