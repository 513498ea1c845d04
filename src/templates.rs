//! Template bank: the fixed catalog of starter sources and literal files.
//!
//! `WEBAPP_MAIN` and `API_MAIN` carry conditional markers understood by
//! [`crate::renderer`]. Every other entry is written out verbatim; the HTML
//! templates contain Jinja syntax meant for Flask and must not be rendered.

/// Single-file Hello World application, no conditional sections.
pub const HELLO_WORLD_APP: &str = r#"from flask import Flask

app = Flask(__name__)

@app.route('/')
def hello():
    return '<h1>Hello, World!</h1>'

@app.route('/about')
def about():
    return '<h1>About Page</h1>'

if __name__ == '__main__':
    app.run(debug=True)
"#;

/// `app.py` for web applications.
pub const WEBAPP_MAIN: &str = r#"from flask import Flask, render_template, request, flash, redirect, url_for
{% if has_forms %}from flask_wtf import FlaskForm
from wtforms import StringField, SubmitField
from wtforms.validators import DataRequired{% endif %}
{% if has_database %}from flask_sqlalchemy import SQLAlchemy{% endif %}
{% if has_env %}import os
from dotenv import load_dotenv

load_dotenv(){% endif %}

app = Flask(__name__)
{% if has_env %}app.config['SECRET_KEY'] = os.environ.get('SECRET_KEY') or 'dev-secret-key'
{% if has_database %}app.config['SQLALCHEMY_DATABASE_URI'] = os.environ.get('DATABASE_URL') or 'sqlite:///app.db'{% endif %}
{% else %}app.config['SECRET_KEY'] = 'your-secret-key-here'
{% if has_database %}app.config['SQLALCHEMY_DATABASE_URI'] = 'sqlite:///app.db'{% endif %}
{% endif %}

{% if has_database %}db = SQLAlchemy(app)

class User(db.Model):
    id = db.Column(db.Integer, primary_key=True)
    name = db.Column(db.String(80), unique=True, nullable=False)

    def __repr__(self):
        return f'<User {self.name}>'
{% endif %}

{% if has_forms %}class NameForm(FlaskForm):
    name = StringField('Name', validators=[DataRequired()])
    submit = SubmitField('Submit')
{% endif %}

@app.route('/')
def index():
    return render_template('index.html')

{% if has_forms %}@app.route('/form', methods=['GET', 'POST'])
def form():
    form = NameForm()
    if form.validate_on_submit():
        flash(f'Hello {form.name.data}!')
        return redirect(url_for('form'))
    return render_template('form.html', form=form)
{% endif %}

{% if has_database %}@app.route('/users')
def users():
    users = User.query.all()
    return render_template('users.html', users=users)
{% endif %}

if __name__ == '__main__':
    {% if has_database %}with app.app_context():
        db.create_all()
    {% endif %}app.run(debug=True)
"#;

/// `app.py` for REST APIs. Without a database the items live in memory.
pub const API_MAIN: &str = r#"from flask import Flask, jsonify, request
{% if has_database %}from flask_sqlalchemy import SQLAlchemy{% endif %}
{% if has_env %}import os
from dotenv import load_dotenv

load_dotenv(){% endif %}

app = Flask(__name__)
{% if has_env %}{% if has_database %}app.config['SQLALCHEMY_DATABASE_URI'] = os.environ.get('DATABASE_URL') or 'sqlite:///api.db'{% endif %}
{% else %}{% if has_database %}app.config['SQLALCHEMY_DATABASE_URI'] = 'sqlite:///api.db'{% endif %}
{% endif %}

{% if has_database %}db = SQLAlchemy(app)

class Item(db.Model):
    id = db.Column(db.Integer, primary_key=True)
    name = db.Column(db.String(80), nullable=False)
    description = db.Column(db.Text)

    def to_dict(self):
        return {
            'id': self.id,
            'name': self.name,
            'description': self.description
        }
{% endif %}

@app.route('/api/health')
def health():
    return jsonify({'status': 'ok', 'message': 'API is running'})

{% if has_database %}@app.route('/api/items', methods=['GET'])
def get_items():
    items = Item.query.all()
    return jsonify([item.to_dict() for item in items])

@app.route('/api/items', methods=['POST'])
def create_item():
    data = request.get_json()
    item = Item(name=data['name'], description=data.get('description'))
    db.session.add(item)
    db.session.commit()
    return jsonify(item.to_dict()), 201

@app.route('/api/items/<int:item_id>', methods=['GET'])
def get_item(item_id):
    item = Item.query.get_or_404(item_id)
    return jsonify(item.to_dict())
{% else %}
items = [
    {'id': 1, 'name': 'Sample Item', 'description': 'This is a sample item'}
]

@app.route('/api/items', methods=['GET'])
def get_items():
    return jsonify(items)

@app.route('/api/items', methods=['POST'])
def create_item():
    data = request.get_json()
    new_item = {
        'id': len(items) + 1,
        'name': data['name'],
        'description': data.get('description')
    }
    items.append(new_item)
    return jsonify(new_item), 201
{% endif %}

if __name__ == '__main__':
    {% if has_database %}with app.app_context():
        db.create_all()
    {% endif %}app.run(debug=True)
"#;

/// `templates/base.html`
pub const BASE_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% block title %}Flask App{% endblock %}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
    <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
        <div class="container">
            <a class="navbar-brand" href="{{ url_for('index') }}">Flask App</a>
        </div>
    </nav>

    <div class="container mt-4">
        {% with messages = get_flashed_messages() %}
            {% if messages %}
                {% for message in messages %}
                    <div class="alert alert-success alert-dismissible fade show" role="alert">
                        {{ message }}
                        <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
                    </div>
                {% endfor %}
            {% endif %}
        {% endwith %}

        {% block content %}{% endblock %}
    </div>

    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#;

pub const INDEX_HTML: &str = r#"{% extends "base.html" %}

{% block title %}Home - Flask App{% endblock %}

{% block content %}
<div class="row">
    <div class="col-md-8 mx-auto">
        <div class="jumbotron bg-light p-5 rounded">
            <h1 class="display-4">Hello, Flask!</h1>
            <p class="lead">This is your new Flask application.</p>
            <hr class="my-4">
            <p>Get started by editing your templates and routes.</p>
        </div>
    </div>
</div>
{% endblock %}
"#;

/// Written only when forms are enabled.
pub const FORM_HTML: &str = r#"{% extends "base.html" %}

{% block title %}Form - Flask App{% endblock %}

{% block content %}
<div class="row">
    <div class="col-md-6 mx-auto">
        <h2>Sample Form</h2>
        <form method="POST">
            {{ form.hidden_tag() }}
            <div class="mb-3">
                {{ form.name.label(class="form-label") }}
                {{ form.name(class="form-control") }}
            </div>
            <div class="mb-3">
                {{ form.submit(class="btn btn-primary") }}
            </div>
        </form>
    </div>
</div>
{% endblock %}
"#;

/// Written only when environment variables are enabled.
pub const ENV_TEMPLATE: &str = r#"# Flask Configuration
FLASK_APP=app.py
FLASK_ENV=development
SECRET_KEY=your-secret-key-here

# Database
DATABASE_URL=sqlite:///app.db

# Other configurations
DEBUG=True
"#;

/// Standard Python and Flask ignore patterns.
pub const GITIGNORE: &str = r#"# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
pip-wheel-metadata/
share/python-wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# PyInstaller
*.manifest
*.spec

# Installer logs
pip-log.txt
pip-delete-this-directory.txt

# Unit test / coverage reports
htmlcov/
.tox/
.nox/
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
*.py,cover
.hypothesis/
.pytest_cache/

# Translations
*.mo
*.pot

# Django stuff:
*.log
local_settings.py
db.sqlite3
db.sqlite3-journal

# Flask stuff:
instance/
.webassets-cache

# Scrapy stuff:
.scrapy

# Sphinx documentation
docs/_build/

# PyBuilder
target/

# Jupyter Notebook
.ipynb_checkpoints

# IPython
profile_default/
ipython_config.py

# pyenv
.python-version

# pipenv
Pipfile.lock

# PEP 582
__pypackages__/

# Celery stuff
celerybeat-schedule
celerybeat.pid

# SageMath parsed files
*.sage.py

# Environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# Spyder project settings
.spyderproject
.spyproject

# Rope project settings
.ropeproject

# mkdocs documentation
/site

# mypy
.mypy_cache/
.dmypy.json
dmypy.json

# Pyre type checker
.pyre/

# IDE
.vscode/
.idea/
*.swp
*.swo
*~

# OS
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
ehthumbs.db
Thumbs.db
"#;
