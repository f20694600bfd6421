/// Generate a router async method that walks the provider chain for one
/// capability and ingests the winning response.
///
/// Notes on `not_found` label:
/// - Pass a noun phrase only (e.g., "tide predictions").
/// - The orchestrator formats the final error as "{label} between {start} and {end}".
///
/// A response is accepted only if something survives ingestion and the
/// request window; otherwise the next provider is tried.
#[macro_export]
macro_rules! tidewise_router_fetch {
    (
        $(#[$meta:meta])*
        method: $name:ident -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        quantity: $quantity:expr,
        ingest: $ingest:path,
        not_found: $not_found:literal
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "tidewise::router",
                skip(self),
                fields(start = %req.start, end = %req.end),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no capable provider produced plausible data in the
        /// window, or none support the capability.
        pub async fn $name(
            &self,
            req: tidewise_core::WindowRequest,
        ) -> Result<$crate::Sourced<tidewise_core::Ingested<$ret>>, tidewise_core::TidewiseError> {
            let bound = self.cfg.bound_for($quantity);
            self.fetch_chain(
                $capability,
                format!(concat!($not_found, " between {} and {}"), req.start, req.end),
                move |c| {
                    c.$accessor()?;
                    Some(async move {
                        match c.$accessor() {
                            Some(p) => p.$name(req).await,
                            None => Err(tidewise_core::TidewiseError::connector(
                                c.name(),
                                concat!("missing ", $not_found, " capability during call"),
                            )),
                        }
                    })
                },
                |connector, raw| {
                    let tidewise_core::Ingested { data, mut stats } =
                        $ingest(raw, $quantity, &bound)?;
                    let data = data.window(req.start, req.end);
                    stats.kept = data.len();
                    if data.is_empty() {
                        return Err(tidewise_core::TidewiseError::not_found(format!(
                            concat!("plausible ", $not_found, " from {}"),
                            connector
                        )));
                    }
                    Ok(tidewise_core::Ingested { data, stats })
                },
            )
            .await
        }
    };
}
