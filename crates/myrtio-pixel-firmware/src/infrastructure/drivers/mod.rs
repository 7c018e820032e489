mod rmt_channel;

pub(crate) use rmt_channel::{RmtChannelError, RmtSymbolChannel};
