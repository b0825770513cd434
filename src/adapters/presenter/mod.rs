//! Presenter adapters.

mod channel;

pub use channel::{ChannelPresenter, PresenterEvent};
