//! The upload/display page, embedded as a single document the way the
//! server serves everything else: no template engine, no static assets.

pub const INDEX_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Weed Identifier</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: linear-gradient(135deg, #1b7a43 0%, #64b37a 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 20px;
        }

        .container {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            max-width: 800px;
            width: 100%;
            padding: 40px;
        }

        h1 {
            color: #1b5e33;
            margin-bottom: 10px;
            font-size: 2em;
        }

        .subtitle {
            color: #666;
            margin-bottom: 30px;
            font-size: 0.9em;
        }

        .upload-area {
            border: 3px dashed #2e9e5b;
            border-radius: 15px;
            padding: 40px 20px;
            text-align: center;
            cursor: pointer;
            transition: all 0.3s;
            background: #f4fbf6;
        }

        .upload-area:hover {
            border-color: #1b5e33;
            background: #eaf7ee;
        }

        .upload-area.dragover {
            border-color: #1b5e33;
            background: #def3e5;
            transform: scale(1.02);
        }

        .upload-icon {
            font-size: 4em;
            margin-bottom: 20px;
        }

        .upload-text {
            color: #2e9e5b;
            font-size: 1.2em;
            font-weight: 600;
            margin-bottom: 10px;
        }

        .upload-hint {
            color: #999;
            font-size: 0.9em;
        }

        input[type="file"] {
            display: none;
        }

        .preview-image {
            max-width: 100%;
            max-height: 300px;
            border-radius: 10px;
            box-shadow: 0 4px 15px rgba(0,0,0,0.1);
        }

        .submit-btn {
            width: 100%;
            margin-top: 20px;
            padding: 14px;
            border: none;
            border-radius: 10px;
            background: #2e9e5b;
            color: white;
            font-size: 1.1em;
            font-weight: 600;
            cursor: pointer;
            transition: background 0.3s;
        }

        .submit-btn:hover:not(:disabled) {
            background: #1b5e33;
        }

        .submit-btn:disabled {
            background: #b9d8c4;
            cursor: not-allowed;
        }

        .result {
            background: #f4fbf6;
            border-radius: 10px;
            padding: 20px;
            margin-top: 20px;
        }

        .result h3 {
            color: #1b5e33;
            font-size: 1.4em;
            margin-bottom: 4px;
        }

        .scientific-name {
            color: #666;
            font-style: italic;
            margin-bottom: 15px;
        }

        .result-label {
            color: #2e9e5b;
            font-weight: 600;
            margin-top: 18px;
            margin-bottom: 8px;
            font-size: 0.9em;
            text-transform: uppercase;
            letter-spacing: 1px;
        }

        .result-text {
            color: #333;
            line-height: 1.6;
        }

        .result ul {
            color: #333;
            line-height: 1.6;
            padding-left: 22px;
        }

        .placeholder {
            text-align: center;
            color: #999;
            padding: 40px 20px;
        }

        .placeholder .upload-icon {
            color: #cfe7d7;
        }

        .loading {
            text-align: center;
            padding: 40px;
            display: none;
        }

        .spinner {
            border: 4px solid #f3f3f3;
            border-top: 4px solid #2e9e5b;
            border-radius: 50%;
            width: 50px;
            height: 50px;
            animation: spin 1s linear infinite;
            margin: 0 auto 20px;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .error {
            background: #fee;
            border: 2px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 10px;
            margin-top: 20px;
            display: none;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>🌿 Weed Identifier</h1>
        <p class="subtitle">Upload a photo of a weed and get its name, characteristics, and control methods</p>

        <div class="upload-area" id="uploadArea">
            <div id="uploadPlaceholder">
                <div class="upload-icon">🍃</div>
                <div class="upload-text">Click or drag image here</div>
                <div class="upload-hint">Supports JPG, PNG, WebP • Max 10MB</div>
            </div>
            <img id="previewImage" class="preview-image" alt="Weed preview" style="display: none;">
            <input type="file" id="fileInput" accept="image/*">
        </div>

        <button class="submit-btn" id="identifyBtn" disabled>Identify Weed</button>

        <div class="error" id="error"></div>

        <div class="loading" id="loading">
            <div class="spinner"></div>
            <p>Analyzing your image...</p>
        </div>

        <div class="result" id="result">
            <div class="placeholder" id="placeholder">
                <div class="upload-icon">🌱</div>
                <p>Upload an image to see weed information</p>
            </div>
            <div id="reportFields" style="display: none;">
                <h3 id="weedName"></h3>
                <p class="scientific-name" id="scientificName"></p>
                <p class="result-text" id="description"></p>
                <div class="result-label">Characteristics</div>
                <ul id="characteristics"></ul>
                <div class="result-label">Control Methods</div>
                <ul id="controlMethods"></ul>
                <div class="result-label">Impact on Crops</div>
                <p class="result-text" id="impact"></p>
            </div>
        </div>
    </div>

    <script>
        const uploadArea = document.getElementById('uploadArea');
        const uploadPlaceholder = document.getElementById('uploadPlaceholder');
        const fileInput = document.getElementById('fileInput');
        const previewImage = document.getElementById('previewImage');
        const identifyBtn = document.getElementById('identifyBtn');
        const loading = document.getElementById('loading');
        const errorDiv = document.getElementById('error');
        const placeholder = document.getElementById('placeholder');
        const reportFields = document.getElementById('reportFields');

        let selectedFile = null;
        let inFlight = false;

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file && file.type.startsWith('image/')) {
                selectFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                selectFile(file);
            }
        });

        function selectFile(file) {
            selectedFile = file;

            const reader = new FileReader();
            reader.onload = (e) => {
                previewImage.src = e.target.result;
                previewImage.style.display = 'block';
                uploadPlaceholder.style.display = 'none';
            };
            reader.readAsDataURL(file);

            hideError();
            clearResult();
            identifyBtn.disabled = false;
        }

        function showError(message) {
            errorDiv.textContent = message;
            errorDiv.style.display = 'block';
        }

        function hideError() {
            errorDiv.style.display = 'none';
        }

        function clearResult() {
            reportFields.style.display = 'none';
            placeholder.style.display = 'block';
        }

        function setLoading(value) {
            inFlight = value;
            loading.style.display = value ? 'block' : 'none';
            identifyBtn.disabled = value || !selectedFile;
        }

        function fillList(element, items) {
            element.textContent = '';
            for (const item of items || []) {
                const li = document.createElement('li');
                li.textContent = item;
                element.appendChild(li);
            }
        }

        function renderReport(report) {
            document.getElementById('weedName').textContent = report.name;
            document.getElementById('scientificName').textContent = report.scientificName;
            document.getElementById('description').textContent = report.description;
            fillList(document.getElementById('characteristics'), report.characteristics);
            fillList(document.getElementById('controlMethods'), report.controlMethods);
            document.getElementById('impact').textContent = report.impact;
            placeholder.style.display = 'none';
            reportFields.style.display = 'block';
        }

        identifyBtn.addEventListener('click', async () => {
            if (inFlight) {
                return;
            }
            if (!selectedFile) {
                showError('Please select an image to analyze');
                return;
            }

            setLoading(true);
            hideError();

            const formData = new FormData();
            formData.append('image', selectedFile);

            try {
                const response = await fetch('/identify', {
                    method: 'POST',
                    body: formData
                });

                if (!response.ok) {
                    throw new Error('identification failed');
                }

                renderReport(await response.json());
            } catch (err) {
                clearResult();
                showError('Failed to analyze the image. Please try again.');
            } finally {
                setLoading(false);
            }
        });
    </script>
</body>
</html>
"#;
