#[cfg(test)]
pub const BLOG_DATA: &str = r#"{
  "posts": [
    {
      "slug": "oscilloscope-basics",
      "title": "Oscilloscope Basics",
      "publishDate": "2023-11-02",
      "author": "Ravi Kumar",
      "excerpt": "Bandwidth, sample rate & probes.",
      "heroImage": "../images/blog/scope.jpg",
      "heroAlt": "Oscilloscope on a bench",
      "readingTime": 6,
      "topics": ["test-measurement"]
    },
    {
      "slug": "hbm-memory-testing",
      "title": "Testing HBM <Memory>",
      "publishDate": "2024-03-05",
      "excerpt": "Why HBM needs new test strategies.",
      "metaDescription": "HBM test strategies for 2024",
      "heroImage": "https://cdn.primeasure.com/hbm.png",
      "readingTime": 8,
      "topics": ["memory", "cool-stuff"]
    },
    {
      "slug": "broadcast-ip-migration",
      "title": "Broadcast IP Migration",
      "publishDate": "2024-01-15",
      "excerpt": "Moving from SDI to ST 2110.",
      "heroImage": "",
      "readingTime": 5,
      "topics": []
    }
  ]
}"#;

#[cfg(test)]
pub const EVENTS_DATA: &str = r#"{
  "events": [
    {
      "title": "Broadcast India 2025",
      "date": "2025-10-08",
      "dateEnd": "2025-10-10",
      "time": "10:00 AM",
      "location": "Mumbai",
      "description": "Meet us at booth B12.",
      "image": "../images/events/bi2025.png",
      "imageAlt": "Broadcast India logo",
      "status": "upcoming",
      "registrationEnabled": true,
      "slug": "broadcast-india-2025"
    },
    {
      "title": "Memory Summit",
      "date": "TBD",
      "location": "Bengaluru",
      "description": "Dates to be announced.",
      "externalUrl": "https://memorysummit.example.com"
    },
    {
      "title": "Test & Measurement Day",
      "date": "2025-07-21",
      "time": "2:00 PM",
      "location": "Pune",
      "description": "Hands-on session.",
      "image": "https://cdn.example.com/tmd.png"
    },
    {
      "title": "Convergence 2024",
      "date": "2024-02-14",
      "dateEnd": "2024-02-16",
      "location": "New Delhi",
      "description": "Thanks to all visitors.",
      "image": "../images/events/convergence.png",
      "status": " Completed ",
      "recordingUrl": "https://video.example.com/convergence"
    },
    {
      "title": "Automotive Expo",
      "date": "2024-09-03",
      "location": "Chennai",
      "description": "ADAS validation demos.",
      "status": "completed"
    }
  ]
}"#;
