use std::sync::Arc;
use store_framework::{Slice, SliceClient, StoreActor, StoreClient, StoreError};

#[derive(Debug, Clone, Default, PartialEq)]
struct Playlist {
    tracks: Vec<String>,
    playing: Option<usize>,
}

#[derive(Debug)]
enum PlaylistAction {
    Enqueue(String),
    Play(usize),
    Stop,
}

impl Slice for Playlist {
    type Action = PlaylistAction;

    fn reduce(&self, action: PlaylistAction) -> Self {
        match action {
            PlaylistAction::Enqueue(track) => {
                let mut tracks = self.tracks.clone();
                tracks.push(track);
                Playlist {
                    tracks,
                    playing: self.playing,
                }
            }
            PlaylistAction::Play(index) if index < self.tracks.len() => Playlist {
                tracks: self.tracks.clone(),
                playing: Some(index),
            },
            PlaylistAction::Play(_) => self.clone(),
            PlaylistAction::Stop => Playlist {
                tracks: self.tracks.clone(),
                playing: None,
            },
        }
    }
}

#[derive(Debug, PartialEq)]
struct PlaylistError(String);

#[derive(Clone)]
struct PlaylistClient {
    inner: StoreClient<Playlist>,
}

impl SliceClient<Playlist> for PlaylistClient {
    type Error = PlaylistError;

    fn inner(&self) -> &StoreClient<Playlist> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        PlaylistError(e.to_string())
    }
}

/// Dispatches from a single client are applied in the order they were sent.
#[tokio::test]
async fn test_dispatch_applies_in_order() {
    let (actor, client) = StoreActor::<Playlist>::new(8);
    let handle = tokio::spawn(actor.run());

    client
        .dispatch(PlaylistAction::Enqueue("intro".into()))
        .await
        .unwrap();
    client
        .dispatch(PlaylistAction::Enqueue("outro".into()))
        .await
        .unwrap();
    let state = client.dispatch(PlaylistAction::Play(1)).await.unwrap();

    assert_eq!(state.tracks, vec!["intro".to_string(), "outro".to_string()]);
    assert_eq!(state.playing, Some(1));
    assert_eq!(*client.snapshot(), *state);

    drop(client);
    handle.await.unwrap();
}

/// Snapshots handed out earlier are never mutated by later dispatches.
#[tokio::test]
async fn test_snapshots_are_immutable() {
    let (actor, client) = StoreActor::<Playlist>::new(8);
    tokio::spawn(actor.run());

    let before = client
        .dispatch(PlaylistAction::Enqueue("a".into()))
        .await
        .unwrap();
    let after = client
        .dispatch(PlaylistAction::Enqueue("b".into()))
        .await
        .unwrap();

    assert_eq!(before.tracks.len(), 1);
    assert_eq!(after.tracks.len(), 2);
    assert!(!Arc::ptr_eq(&before, &after));
}

/// Observers are notified of every new snapshot.
#[tokio::test]
async fn test_subscribers_see_changes() {
    let (actor, client) = StoreActor::<Playlist>::new(8);
    tokio::spawn(actor.run());

    let mut observer = client.subscribe();
    assert!(observer.borrow_and_update().tracks.is_empty());

    client
        .dispatch(PlaylistAction::Enqueue("news".into()))
        .await
        .unwrap();

    observer.changed().await.unwrap();
    assert_eq!(observer.borrow_and_update().tracks, vec!["news".to_string()]);
}

/// `wait_for` resolves once a concurrent dispatch makes the predicate true.
#[tokio::test]
async fn test_wait_for_predicate() {
    let (actor, client) = StoreActor::<Playlist>::new(8);
    tokio::spawn(actor.run());

    let waiter = {
        let client = client.clone();
        tokio::spawn(async move { client.wait_for(|p| p.playing.is_some()).await })
    };

    client
        .dispatch(PlaylistAction::Enqueue("x".into()))
        .await
        .unwrap();
    client.dispatch(PlaylistAction::Play(0)).await.unwrap();

    let state = waiter.await.unwrap().unwrap();
    assert_eq!(state.playing, Some(0));
}

/// A preloaded store starts from the given state, and the wrapper trait reads it.
#[tokio::test]
async fn test_with_state_and_slice_client() {
    let initial = Playlist {
        tracks: vec!["one".into()],
        playing: Some(0),
    };
    let (actor, inner) = StoreActor::with_state(8, initial.clone());
    tokio::spawn(actor.run());
    let client = PlaylistClient { inner };

    assert_eq!(*client.snapshot(), initial);
    assert_eq!(*client.state().await.unwrap(), initial);

    client.inner().dispatch(PlaylistAction::Stop).await.unwrap();
    assert_eq!(client.state().await.unwrap().playing, None);
}

/// Once the actor task is gone, requests fail with `StoreClosed`.
#[tokio::test]
async fn test_closed_store_reports_error() {
    let (actor, client) = StoreActor::<Playlist>::new(8);
    let handle = tokio::spawn(actor.run());
    handle.abort();
    let _ = handle.await;

    assert!(client.is_closed());
    let result = client.dispatch(PlaylistAction::Stop).await;
    assert_eq!(result, Err(StoreError::StoreClosed));

    let wrapped = PlaylistClient { inner: client };
    assert_eq!(
        wrapped.state().await,
        Err(PlaylistError("Store closed".to_string()))
    );
}

/// Enqueued actions keep the caller's order even when each reply is awaited on a
/// different worker thread.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_enqueue_preserves_caller_order() {
    let (actor, client) = StoreActor::<Playlist>::new(64);
    tokio::spawn(actor.run());

    let mut waiters = Vec::new();
    for n in 0..32 {
        let queued = client.enqueue(PlaylistAction::Enqueue(format!("track-{n}"))).unwrap();
        waiters.push(tokio::spawn(queued.applied()));
    }
    for waiter in waiters {
        waiter.await.unwrap().unwrap();
    }

    let expected: Vec<String> = (0..32).map(|n| format!("track-{n}")).collect();
    assert_eq!(client.snapshot().tracks, expected);
}

/// `enqueue` never waits: a full mailbox or a stopped store is reported immediately.
#[tokio::test]
async fn test_enqueue_reports_full_and_closed() {
    let (actor, client) = StoreActor::<Playlist>::new(1);

    let first = client.enqueue(PlaylistAction::Stop).unwrap();
    assert_eq!(
        client.enqueue(PlaylistAction::Stop).err(),
        Some(StoreError::StoreFull)
    );

    let handle = tokio::spawn(actor.run());
    assert_eq!(first.applied().await.unwrap().playing, None);

    handle.abort();
    let _ = handle.await;
    assert_eq!(
        client.enqueue(PlaylistAction::Stop).err(),
        Some(StoreError::StoreClosed)
    );
}
