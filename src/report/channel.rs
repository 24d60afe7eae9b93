use ts3_abi::ChannelProperty as P;

use crate::query::VariableQuery;
use crate::report::{Style, push_field};

pub(crate) fn render(query: &dyn VariableQuery, connection: u64, channel: u64) -> String {
    let var = |prop: P| query.channel_var(connection, channel, prop);

    let mut out = String::new();
    push_field(&mut out, "Channel-NAME", &var(P::Name), Style::Italic);
    push_field(&mut out, "Channel-ORDER", &var(P::Order), Style::Italic);
    push_field(
        &mut out,
        "Channel-DELETE-DELAY",
        &var(P::DeleteDelay),
        Style::Italic,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::*;
    use ts3_abi::{AnyId, ChannelProperty, ClientProperty, VirtualServerProperty};

    mock! {
        pub Query {}
        impl crate::query::VariableQuery for Query {
            fn refresh_server(&self, connection: u64);
            fn server_var(&self, connection: u64, prop: VirtualServerProperty) -> String;
            fn channel_var(&self, connection: u64, channel: u64, prop: ChannelProperty) -> String;
            fn client_var(&self, connection: u64, client: AnyId, prop: ClientProperty) -> String;
        }
    }

    #[test]
    fn renders_channel_fields_in_order() {
        let mut mock = MockQuery::new();
        mock.expect_channel_var()
            .with(eq(3u64), eq(42u64), eq(P::Name))
            .returning(|_, _, _| "Lobby".to_string());
        mock.expect_channel_var()
            .with(eq(3u64), eq(42u64), eq(P::Order))
            .returning(|_, _, _| "5".to_string());
        mock.expect_channel_var()
            .with(eq(3u64), eq(42u64), eq(P::DeleteDelay))
            .returning(|_, _, _| "60".to_string());

        let report = render(&mock, 3, 42);
        assert_eq!(
            report,
            "Channel-NAME: [I]Lobby[/I]\nChannel-ORDER: [I]5[/I]\nChannel-DELETE-DELAY: [I]60[/I]\n"
        );
    }
}
