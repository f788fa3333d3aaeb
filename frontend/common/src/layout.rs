use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlainChildrenProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Centre the items in the middle of the screen, one on top of another.
/// Used for single-purpose screens like the login prompt.
#[function_component]
pub fn CenteredPanel(props: &PlainChildrenProps) -> Html {
    html! {
        <div class={classes!("flex", "h-screen", "flex-col", "items-center", "justify-center", props.class.clone())}>
            { props.children.iter().map(|child| html!(<div class="mb-3">{child}</div>)).collect::<Html>() }
        </div>
    }
}

/// Props shared by the pieces of chrome that show or hide the sidebar.
/// The state itself lives in whichever page renders the shell.
#[derive(Properties, PartialEq)]
pub struct SidebarStateProps {
    pub open: bool,
    pub on_toggle: Callback<bool>,
}

#[derive(Properties, PartialEq)]
pub struct DashboardShellProps {
    pub sidebar_open: bool,
    pub on_sidebar_toggle: Callback<bool>,
    #[prop_or_default]
    pub children: Children,
}

/// Fixed sidebar on the left, header on top, page content below it.
#[function_component]
pub fn DashboardShell(props: &DashboardShellProps) -> Html {
    html! {
        <div class="flex h-screen overflow-hidden">
            <Sidebar open={props.sidebar_open} on_toggle={props.on_sidebar_toggle.clone()} />
            <div class="relative flex flex-col flex-1 overflow-y-auto overflow-x-hidden">
                <Header open={props.sidebar_open} on_toggle={props.on_sidebar_toggle.clone()} />
                <main class="grow">
                    <div class="px-4 sm:px-6 lg:px-8 py-8 w-full max-w-9xl mx-auto">
                        { for props.children.iter() }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[function_component]
pub fn Sidebar(props: &SidebarStateProps) -> Html {
    let close_cb = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(false);
        })
    };

    // Below the lg breakpoint the sidebar slides in over the content.
    let translate = if props.open {
        "translate-x-0"
    } else {
        "-translate-x-64"
    };

    html! {
        <div class="min-w-fit">
            if props.open {
                <div class="fixed inset-0 bg-gray-900/30 z-40 lg:hidden" aria-hidden="true" onclick={close_cb.clone()}></div>
            }
            <div class={classes!("flex", "flex-col", "absolute", "z-40", "left-0", "top-0", "lg:static", "lg:translate-x-0", "h-screen", "w-64", "shrink-0", "bg-white", "dark:bg-gray-800", "p-4", "transition-all", "duration-200", "ease-in-out", translate)}>
                <div class="flex justify-between mb-10 pr-3 sm:px-2">
                    <button class="lg:hidden text-gray-500 hover:text-gray-400" aria-controls="sidebar" aria-expanded={props.open.to_string()} onclick={close_cb}>
                        <span class="sr-only">{"Close sidebar"}</span>
                        {"←"}
                    </button>
                    <span class="text-lg font-bold text-violet-500">{"Marketplace Admin"}</span>
                </div>
                <ul class="space-y-1">
                    <li class="px-3 py-2 rounded-lg bg-violet-500/[0.12] text-gray-800 dark:text-gray-100 font-medium">{"Sellers"}</li>
                </ul>
            </div>
        </div>
    }
}

#[function_component]
pub fn Header(props: &SidebarStateProps) -> Html {
    let toggle_cb = {
        let on_toggle = props.on_toggle.clone();
        let open = props.open;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(!open);
        })
    };

    html! {
        <header class="sticky top-0 z-30 bg-white/90 dark:bg-gray-800/90 border-b border-gray-200 dark:border-gray-700/60">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button class="text-gray-500 hover:text-gray-600 lg:hidden" aria-controls="sidebar" aria-expanded={props.open.to_string()} onclick={toggle_cb}>
                        <span class="sr-only">{"Open sidebar"}</span>
                        {"☰"}
                    </button>
                </div>
            </div>
        </header>
    }
}
