use earnings_core::{CoreError, NowPlayingClient, NowPlayingState};

/// Fetch once and print the widget state.
pub fn run(json: bool) -> Result<(), CoreError> {
    let runtime = tokio::runtime::Runtime::new()?;
    let state = runtime.block_on(fetch_state());

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", describe(&state));
    }
    Ok(())
}

pub async fn fetch_state() -> NowPlayingState {
    match NowPlayingClient::from_env() {
        Ok(client) => client.load_state().await,
        Err(e) => NowPlayingState::from_result(Err(e)),
    }
}

pub fn describe(state: &NowPlayingState) -> String {
    match state {
        NowPlayingState::Disabled => "now playing: set SPOTIFY_ACCESS_TOKEN to enable".to_string(),
        NowPlayingState::Loading => "now playing: loading...".to_string(),
        NowPlayingState::Ready(None) => "now playing: nothing".to_string(),
        NowPlayingState::Ready(Some(track)) => {
            format!("now playing: {} - {}", track.name, track.artist_line())
        }
        NowPlayingState::Failed(msg) => format!("now playing: error ({msg})"),
    }
}
