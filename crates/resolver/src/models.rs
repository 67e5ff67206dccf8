use serde::Deserialize;

/// Response body of `<mirror>/streams/<id>`. Only the audio stream list is of
/// interest; the rest of the manifest (video streams, metadata, related
/// items) is ignored.
#[derive(Debug, Deserialize)]
pub struct StreamsResponse {
    #[serde(rename = "audioStreams", default)]
    pub audio_streams: Vec<AudioStream>,
}

/// One audio stream option offered by a mirror.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioStream {
    pub url: String,
    #[serde(default)]
    pub bitrate: u64,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

impl AudioStream {
    /// Streams in the mp4/m4a family decode everywhere the callers run;
    /// anything else (webm/opus) is skipped. The `format` field covers
    /// manifests whose MIME type omits the container.
    pub fn is_eligible(&self) -> bool {
        let mime_ok = self
            .mime_type
            .as_deref()
            .is_some_and(|mime| mime.contains("mp4") || mime.contains("m4a"));
        let format_ok = self
            .format
            .as_deref()
            .is_some_and(|format| format.eq_ignore_ascii_case("m4a"));
        mime_ok || format_ok
    }
}

/// Pick the eligible stream with the strictly highest bitrate. Ties keep the
/// first candidate in document order, so selection is deterministic for a
/// fixed manifest.
pub fn select_best_audio(streams: &[AudioStream]) -> Option<&AudioStream> {
    let mut best: Option<&AudioStream> = None;
    for stream in streams.iter().filter(|s| s.is_eligible()) {
        match best {
            Some(current) if stream.bitrate <= current.bitrate => {}
            _ => best = Some(stream),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(url: &str, bitrate: u64, mime: Option<&str>, format: Option<&str>) -> AudioStream {
        AudioStream {
            url: url.to_owned(),
            bitrate,
            mime_type: mime.map(str::to_owned),
            format: format.map(str::to_owned),
        }
    }

    #[test]
    fn streams_response_deserializes_manifest() {
        let json_str = r#"{
            "title": "Some Track",
            "uploader": "Some Artist",
            "audioStreams": [
                {
                    "url": "https://cdn.example/a.m4a",
                    "bitrate": 128000,
                    "mimeType": "audio/mp4",
                    "format": "M4A"
                },
                {
                    "url": "https://cdn.example/a.webm",
                    "bitrate": 160000,
                    "mimeType": "audio/webm"
                }
            ],
            "videoStreams": []
        }"#;

        let response: StreamsResponse = serde_json::from_str(json_str).unwrap();
        assert_eq!(response.audio_streams.len(), 2);
        assert_eq!(response.audio_streams[0].bitrate, 128000);
        assert_eq!(
            response.audio_streams[1].mime_type.as_deref(),
            Some("audio/webm")
        );
        assert_eq!(response.audio_streams[1].format, None);
    }

    #[test]
    fn missing_audio_streams_field_is_an_empty_list() {
        let response: StreamsResponse = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(response.audio_streams.is_empty());
    }

    #[test]
    fn webm_without_format_is_ineligible() {
        let candidate = stream("u", 160000, Some("audio/webm"), None);
        assert!(!candidate.is_eligible());
    }

    #[test]
    fn m4a_format_field_alone_is_eligible() {
        let candidate = stream("u", 128000, Some("audio/webm"), Some("m4a"));
        assert!(candidate.is_eligible());

        let upper = stream("u", 128000, None, Some("M4A"));
        assert!(upper.is_eligible());
    }

    #[test]
    fn highest_bitrate_wins() {
        let streams = vec![
            stream("low", 128000, Some("audio/mp4"), None),
            stream("high", 256000, Some("audio/mp4"), None),
            stream("mid", 192000, Some("audio/mp4"), None),
        ];
        assert_eq!(select_best_audio(&streams).unwrap().url, "high");
    }

    #[test]
    fn equal_bitrate_keeps_first_seen() {
        let streams = vec![
            stream("first", 128000, Some("audio/mp4"), None),
            stream("second", 128000, Some("audio/mp4"), None),
        ];
        assert_eq!(select_best_audio(&streams).unwrap().url, "first");
    }

    #[test]
    fn ineligible_streams_never_win_on_bitrate() {
        let streams = vec![
            stream("webm", 320000, Some("audio/webm"), None),
            stream("m4a", 128000, Some("audio/mp4"), None),
        ];
        assert_eq!(select_best_audio(&streams).unwrap().url, "m4a");
    }

    #[test]
    fn no_eligible_streams_selects_nothing() {
        let streams = vec![stream("webm", 160000, Some("audio/webm"), None)];
        assert!(select_best_audio(&streams).is_none());
        assert!(select_best_audio(&[]).is_none());
    }
}
