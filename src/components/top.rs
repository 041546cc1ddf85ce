use crate::objects::ViewConfig;
use crate::pages::TicketsPage;
use yew::{prelude::*, Component};

pub struct Top {
    config: ViewConfig,
}

impl Component for Top {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: ViewConfig::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> yew::Html {
        html! {
            <TicketsPage config={self.config.clone()}/>
        }
    }
}
