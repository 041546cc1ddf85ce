use crate::components::{Notification, TicketList};
use crate::objects::ViewConfig;
use yew::{prelude::*, Html};

pub struct TicketsPage {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub config: ViewConfig,
}

impl Component for TicketsPage {
    type Message = ();
    type Properties = Props;

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1 class="title">{"Билеты"}</h1>
                <Notification/>
                <TicketList config={ctx.props().config.clone()}/>
            </div>
        }
    }

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }
}
