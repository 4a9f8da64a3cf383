use s3_crud::store::{InMemoryBackend, ObjectStoreClient};

fn client_with_bucket() -> ObjectStoreClient<InMemoryBackend> {
    let client = ObjectStoreClient::new(InMemoryBackend::new(), 0);
    client.create_bucket("b1").unwrap();
    client
}

#[test]
fn test_upload_then_download_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.bin");
    let target = dir.path().join("target.bin");
    let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    std::fs::write(&source, &content).unwrap();

    let client = client_with_bucket();
    client.upload_object("b1", &source, "bin/blob").unwrap();
    client.download_object("b1", "bin/blob", &target).unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), content);
    assert_eq!(client.backend().object("b1", "bin/blob").unwrap(), content);
}

#[test]
fn test_upload_overwrites_remote_object() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    let client = client_with_bucket();

    std::fs::write(&source, "first").unwrap();
    client.upload_object("b1", &source, "k").unwrap();
    std::fs::write(&source, "second").unwrap();
    client.upload_object("b1", &source, "k").unwrap();

    assert_eq!(client.backend().object("b1", "k").unwrap(), b"second");
}

#[test]
fn test_download_overwrites_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.txt");
    let target = dir.path().join("target.txt");
    std::fs::write(&source, "remote").unwrap();
    std::fs::write(&target, "stale local content").unwrap();

    let client = client_with_bucket();
    client.upload_object("b1", &source, "k").unwrap();
    client.download_object("b1", "k", &target).unwrap();

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "remote");
}

#[test]
fn test_upload_missing_local_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bucket();
    assert!(
        client
            .upload_object("b1", &dir.path().join("missing"), "k")
            .is_err()
    );
    assert!(client.list_objects("b1").unwrap().is_empty());
}
