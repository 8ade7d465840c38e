use yew::prelude::*;
use yew_hooks::use_mount;

/// One-shot latch set after the first client effect runs. Never reverts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HydrationFlag {
    mounted: bool,
}

impl HydrationFlag {
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns true only for the call that flipped the latch.
    pub fn mark_mounted(&mut self) -> bool {
        let changed = !self.mounted;
        self.mounted = true;
        changed
    }
}

#[derive(Properties, PartialEq)]
pub struct HydrationGateProps {
    /// Static stand-in with the live widget's approximate shape.
    pub placeholder: Html,
    pub children: Children,
}

/// Renders `placeholder` until the client has mounted, then the children for
/// the rest of the page's lifetime.
#[function_component(HydrationGate)]
pub fn hydration_gate(props: &HydrationGateProps) -> Html {
    let flag = use_state_eq(HydrationFlag::default);

    {
        let flag = flag.clone();
        use_mount(move || {
            let mut next = *flag;
            if next.mark_mounted() {
                flag.set(next);
            }
        });
    }

    if flag.is_mounted() {
        html! { <>{ for props.children.iter() }</> }
    } else {
        props.placeholder.clone()
    }
}
